//! Pattern table entries as they appear in configuration.
//!
//! Empty tables in a config file mean "use the built-in table"; the analysis
//! crate owns the built-in entries and compiles whichever table is active.

use serde::{Deserialize, Serialize};

use crate::types::{DataType, Sensitivity};

/// One field-name rule: any keyword hit proposes (data_type, sensitivity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldNameRuleConfig {
    pub name: String,
    pub keywords: Vec<String>,
    pub data_type: DataType,
    pub sensitivity: Sensitivity,
    pub base_confidence: f64,
}

/// Value shapes the engine knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    Ssn,
    CreditCard,
    Iban,
    Email,
    Phone,
    Ipv4,
    Ipv6,
    MacAddress,
    PostalCode,
    /// Custom pattern; requires `pattern`.
    Regex,
}

impl DetectorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ssn => "ssn",
            Self::CreditCard => "credit_card",
            Self::Iban => "iban",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::MacAddress => "mac_address",
            Self::PostalCode => "postal_code",
            Self::Regex => "regex",
        }
    }
}

/// One content detector entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDetectorConfig {
    pub name: String,
    pub kind: DetectorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub data_type: DataType,
    pub sensitivity: Sensitivity,
    /// Overrides `sampling.firing_threshold` for this detector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firing_threshold: Option<f64>,
}

/// Field names ending in one of `suffixes` are usually metadata about the
/// sensitive value rather than the value itself (`email_count`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameSuppressionConfig {
    pub suffixes: Vec<String>,
    /// Confidence multiplier in [0, 1].
    pub factor: f64,
}
