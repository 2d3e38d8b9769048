//! Structured error codes.

/// Trait giving every datatier error a stable machine-readable code.
/// Codes end up in degraded-column evidence and in structured logs, so they
/// must not change once published.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INPUT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const DETECTOR_PANIC: &str = "DETECTOR_PANIC";
pub const CANCELLED: &str = "CANCELLED";
