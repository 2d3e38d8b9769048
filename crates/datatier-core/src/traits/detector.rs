//! Content detector seam.

use crate::errors::DetectionError;

/// A predicate over one rendered (trimmed, non-empty) column value.
///
/// Built-in detectors never fail. Caller-supplied detectors may return an
/// error, which degrades the column being classified and nothing else.
pub trait ValueDetector: Send + Sync {
    /// Stable detector name, used in evidence and logs.
    fn name(&self) -> &str;

    /// Whether `value` has the shape this detector looks for.
    fn matches(&self, value: &str) -> Result<bool, DetectionError>;
}
