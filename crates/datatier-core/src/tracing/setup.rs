//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

const DEFAULT_LOG_FILTER: &str = "datatier=info";

static INIT: Once = Once::new();

/// Initialize the datatier tracing/logging system.
///
/// Reads `DATATIER_LOG` for per-module log levels, e.g.
/// `DATATIER_LOG=datatier_analysis::content=debug,datatier=info`.
///
/// Falls back to `datatier=info` if `DATATIER_LOG` is not set or is invalid.
/// Idempotent; a subscriber installed elsewhere first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = filter_from_env();

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Resolve the log filter from `DATATIER_LOG`, falling back to
/// `datatier=info` when the variable is unset or does not parse.
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
