//! Evidence and per-column verdicts.

use datatier_core::errors::{ColumnError, ErrorCode};
use datatier_core::types::{DataType, Sensitivity};
use serde::{Deserialize, Serialize};

use super::masking::MaskingStrategy;
use crate::content::{ContentSignal, ValueProfile};
use crate::field_name::NameSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceSource {
    FieldName,
    Content,
    Error,
}

/// One signal that contributed to a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub source: EvidenceSource,
    /// Rule name, detector name, or error code.
    pub rule: String,
    /// Raw signal confidence, before any scoring adjustment.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Sensitivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub mixed_signal: bool,
}

impl Evidence {
    pub fn from_name(signal: &NameSignal) -> Self {
        Self {
            source: EvidenceSource::FieldName,
            rule: signal.rule.clone(),
            confidence: signal.confidence,
            data_type: Some(signal.data_type),
            sensitivity: Some(signal.sensitivity),
            matched_keyword: Some(signal.matched_keyword.clone()),
            match_fraction: None,
            sample_size: None,
            message: None,
            mixed_signal: false,
        }
    }

    pub fn from_content(signal: &ContentSignal) -> Self {
        Self {
            source: EvidenceSource::Content,
            rule: signal.detector.clone(),
            confidence: signal.confidence,
            data_type: Some(signal.data_type),
            sensitivity: Some(signal.sensitivity),
            matched_keyword: None,
            match_fraction: Some(signal.match_fraction),
            sample_size: Some(signal.sampled),
            message: None,
            mixed_signal: false,
        }
    }

    pub fn from_error(error: &ColumnError) -> Self {
        Self {
            source: EvidenceSource::Error,
            rule: error.error_code().to_string(),
            confidence: 0.0,
            data_type: None,
            sensitivity: None,
            matched_keyword: None,
            match_fraction: None,
            sample_size: None,
            message: Some(error.to_string()),
            mixed_signal: false,
        }
    }
}

/// Verdict for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub column_name: String,
    pub data_type: DataType,
    pub sensitivity: Sensitivity,
    pub confidence: f64,
    /// Field-name evidence first, then content, then errors.
    pub evidence: Vec<Evidence>,
    pub masking_strategy: MaskingStrategy,
    pub automation_ready: bool,
    pub mixed_signal: bool,
    pub degraded: bool,
    pub risk_factors: Vec<String>,
    pub profile: ValueProfile,
}

impl ColumnClassification {
    pub fn recommended_action(&self) -> &'static str {
        self.masking_strategy.recommended_action()
    }

    pub fn is_high_risk(&self) -> bool {
        self.sensitivity.is_high_risk()
    }

    /// Needs a human before downstream handling.
    pub fn needs_review(&self) -> bool {
        !self.automation_ready
    }
}
