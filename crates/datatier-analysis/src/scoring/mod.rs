//! Risk scoring: merges the name and content signals for one column.
//!
//! Resolution, in order:
//! 1. no signal: PUBLIC / UNKNOWN at the no-match floor, never ready;
//! 2. one signal: its tier, confidence times the single-source penalty;
//! 3. both on the same tier: mean plus the agreement bonus, never below the
//!    stronger signal, capped at 1.0;
//! 4. different tiers: the higher tier at the plain mean, flagged as a
//!    mixed signal and never ready.

pub mod masking;
pub mod types;

use datatier_core::config::ScoringConfig;
use datatier_core::errors::ColumnError;
use datatier_core::types::{DataType, Sensitivity};

use crate::content::{ContentSignal, ValueProfile};
use crate::field_name::NameSignal;

pub use self::masking::MaskingStrategy;
pub use self::types::{ColumnClassification, Evidence, EvidenceSource};

pub const MIXED_SIGNAL_FACTOR: &str = "Field name and content disagree on sensitivity";
pub const DEGRADED_FACTOR: &str = "Classification failed; handled as most restrictive";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScorer {
    automation_threshold: f64,
    single_source_penalty: f64,
    agreement_bonus: f64,
    no_match_confidence: f64,
}

impl RiskScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            automation_threshold: config.effective_automation_threshold(),
            single_source_penalty: config.effective_single_source_penalty(),
            agreement_bonus: config.effective_agreement_bonus(),
            no_match_confidence: config.effective_no_match_confidence(),
        }
    }

    pub fn automation_threshold(&self) -> f64 {
        self.automation_threshold
    }

    pub fn score(
        &self,
        column_name: &str,
        name: Option<&NameSignal>,
        content: Option<&ContentSignal>,
        profile: ValueProfile,
    ) -> ColumnClassification {
        let mut evidence: Vec<Evidence> = Vec::with_capacity(2);
        evidence.extend(name.map(Evidence::from_name));
        evidence.extend(content.map(Evidence::from_content));

        let (sensitivity, data_type, confidence, mixed_signal) = match (name, content) {
            (None, None) => (
                Sensitivity::Public,
                DataType::Unknown,
                self.no_match_confidence,
                false,
            ),
            (Some(n), None) => (
                n.sensitivity,
                n.data_type,
                n.confidence * self.single_source_penalty,
                false,
            ),
            (None, Some(c)) => (
                c.sensitivity,
                c.data_type,
                c.confidence * self.single_source_penalty,
                false,
            ),
            (Some(n), Some(c)) if n.sensitivity == c.sensitivity => {
                let mean = (n.confidence + c.confidence) / 2.0;
                let agreed = (mean + self.agreement_bonus).max(n.confidence.max(c.confidence));
                (c.sensitivity, c.data_type, agreed, false)
            }
            (Some(n), Some(c)) => {
                let mean = (n.confidence + c.confidence) / 2.0;
                let (sensitivity, data_type) = if n.sensitivity > c.sensitivity {
                    (n.sensitivity, n.data_type)
                } else {
                    (c.sensitivity, c.data_type)
                };
                (sensitivity, data_type, mean, true)
            }
        };
        let confidence = confidence.clamp(0.0, 1.0);

        if mixed_signal {
            for e in &mut evidence {
                e.mixed_signal = true;
            }
        }

        let automation_ready = (name.is_some() || content.is_some())
            && !mixed_signal
            && confidence >= self.automation_threshold;

        let mut risk_factors: Vec<String> = data_type
            .risk_factors()
            .iter()
            .map(|f| f.to_string())
            .collect();
        if mixed_signal {
            risk_factors.push(MIXED_SIGNAL_FACTOR.to_string());
        }

        ColumnClassification {
            column_name: column_name.to_string(),
            data_type,
            sensitivity,
            confidence,
            evidence,
            masking_strategy: MaskingStrategy::for_sensitivity(sensitivity),
            automation_ready,
            mixed_signal,
            degraded: false,
            risk_factors,
            profile,
        }
    }

    /// Verdict for a column whose classification failed: most restrictive
    /// tier, zero confidence, one error evidence entry.
    pub fn degraded(
        &self,
        column_name: &str,
        error: &ColumnError,
        profile: ValueProfile,
    ) -> ColumnClassification {
        let sensitivity = Sensitivity::most_restrictive();
        ColumnClassification {
            column_name: column_name.to_string(),
            data_type: DataType::Unknown,
            sensitivity,
            confidence: 0.0,
            evidence: vec![Evidence::from_error(error)],
            masking_strategy: MaskingStrategy::for_sensitivity(sensitivity),
            automation_ready: false,
            mixed_signal: false,
            degraded: true,
            risk_factors: vec![DEGRADED_FACTOR.to_string()],
            profile,
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}
