//! Risk scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AGREEMENT_BONUS, DEFAULT_AUTOMATION_THRESHOLD, DEFAULT_NO_MATCH_CONFIDENCE,
    DEFAULT_SINGLE_SOURCE_PENALTY,
};

/// Weights used when merging name and content signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Confidence below which a column is not automation-ready. Default: 0.70.
    pub automation_threshold: Option<f64>,
    /// Multiplier for a lone signal. Default: 0.85.
    pub single_source_penalty: Option<f64>,
    /// Added to the mean when both signals agree on a tier. Default: 0.10.
    pub agreement_bonus: Option<f64>,
    /// Confidence when nothing matched. Default: 0.20.
    pub no_match_confidence: Option<f64>,
}

impl ScoringConfig {
    pub fn effective_automation_threshold(&self) -> f64 {
        self.automation_threshold
            .unwrap_or(DEFAULT_AUTOMATION_THRESHOLD)
    }

    pub fn effective_single_source_penalty(&self) -> f64 {
        self.single_source_penalty
            .unwrap_or(DEFAULT_SINGLE_SOURCE_PENALTY)
    }

    pub fn effective_agreement_bonus(&self) -> f64 {
        self.agreement_bonus.unwrap_or(DEFAULT_AGREEMENT_BONUS)
    }

    pub fn effective_no_match_confidence(&self) -> f64 {
        self.no_match_confidence
            .unwrap_or(DEFAULT_NO_MATCH_CONFIDENCE)
    }
}
