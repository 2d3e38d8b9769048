//! Per-column classification failures.

use super::detection_error::DetectionError;
use super::error_code::{self, ErrorCode};

/// A failure confined to one column. Never aborts the dataset-level call:
/// the column is reported as degraded instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnError {
    #[error("Column '{column}': {source}")]
    Detection {
        column: String,
        #[source]
        source: DetectionError,
    },

    #[error("Column '{column}': classification panicked: {message}")]
    Panicked { column: String, message: String },
}

impl ColumnError {
    pub fn column(&self) -> &str {
        match self {
            Self::Detection { column, .. } | Self::Panicked { column, .. } => column,
        }
    }
}

impl ErrorCode for ColumnError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Detection { source, .. } => source.error_code(),
            Self::Panicked { .. } => error_code::DETECTOR_PANIC,
        }
    }
}
