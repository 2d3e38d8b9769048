//! # datatier-core
//!
//! Foundation crate for the datatier classification engine.
//! Defines the sensitivity taxonomy, errors, config, traits, and tracing setup.
//! The analysis crate depends on this; nothing here performs classification.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

pub use config::ClassifierConfig;
pub use errors::{ClassifyError, ConfigError, InputError};
pub use traits::{Cancellable, CancellationToken, ValueDetector};
pub use types::{DataType, Sensitivity};
