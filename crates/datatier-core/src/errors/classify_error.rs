//! Errors returned by a dataset-level classification call.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, InputError};

/// Fatal errors from `classify()`.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Classification cancelled")]
    Cancelled,
}

impl ErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
