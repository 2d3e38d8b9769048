//! Execution configuration.

use serde::{Deserialize, Serialize};

/// Worker settings for per-column parallelism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Dedicated worker threads. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}
