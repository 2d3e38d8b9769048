//! Structured field names used in classification spans and events.
//!
//! Keeping them in one place lets log queries rely on stable keys.

/// Span name for a dataset-level classification call.
pub const CLASSIFY_SPAN: &str = "datatier.classify";

/// Dataset identifier.
pub const DATASET_ID: &str = "dataset_id";

/// Number of input columns.
pub const COLUMN_COUNT: &str = "column_count";

/// Wall-clock duration of a classify call in milliseconds.
pub const CLASSIFY_DURATION_MS: &str = "classify_duration_ms";

/// Columns that degraded to the most restrictive tier.
pub const DEGRADED_COUNT: &str = "degraded_count";

/// Columns whose name and content signals disagreed.
pub const MIXED_SIGNAL_COUNT: &str = "mixed_signal_count";

/// Overall dataset sensitivity tier.
pub const OVERALL_SENSITIVITY: &str = "overall_sensitivity";
