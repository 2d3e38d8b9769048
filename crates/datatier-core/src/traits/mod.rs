//! Trait seams between the engine and its callers.

pub mod cancellation;
pub mod detector;

pub use cancellation::{Cancellable, CancellationToken};
pub use detector::ValueDetector;
