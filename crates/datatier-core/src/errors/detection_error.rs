//! Detection errors.

use super::error_code::{self, ErrorCode};

/// Errors a content detector can report for a single value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectionError {
    #[error("Detector {detector} failed: {message}")]
    DetectorFailed { detector: String, message: String },

    #[error("Detector {detector} cannot evaluate value: {message}")]
    UnsupportedValue { detector: String, message: String },
}

impl ErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
