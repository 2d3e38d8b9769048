//! Observability for datatier.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod metrics;
pub mod setup;

pub use setup::{filter_from_env, init_tracing};
