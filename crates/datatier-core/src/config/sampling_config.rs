//! Content sampling configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FIRING_THRESHOLD, DEFAULT_SAMPLE_SIZE};

/// How many values are drawn per column and how many must match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamplingConfig {
    /// Non-null values sampled per column. Default: 100.
    pub sample_size: Option<usize>,
    /// Match fraction for detectors that do not set their own. Default: 0.60.
    pub firing_threshold: Option<f64>,
}

impl SamplingConfig {
    /// Returns the effective sample size, defaulting to 100.
    pub fn effective_sample_size(&self) -> usize {
        self.sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE)
    }

    /// Returns the effective firing threshold, defaulting to 0.60.
    pub fn effective_firing_threshold(&self) -> f64 {
        self.firing_threshold.unwrap_or(DEFAULT_FIRING_THRESHOLD)
    }
}
