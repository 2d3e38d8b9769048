//! Data type categories.

use serde::{Deserialize, Serialize};

/// Category of information held by a column. Informational only; never ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// Personally identifiable information (name, email, phone, SSN, ...)
    Pii,
    /// Financial data (card numbers, bank accounts, amounts, salaries)
    Financial,
    /// Credentials (passwords, API keys, tokens)
    Credential,
    /// Health data (diagnosis, prescription, medical record)
    Health,
    /// Opaque internal identifiers
    Identifier,
    /// Revenue, sales, and other business measures
    BusinessMetric,
    /// Location data coarse enough to be public (postal code, city, country)
    Geographic,
    Unknown,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pii => "PII",
            Self::Financial => "FINANCIAL",
            Self::Credential => "CREDENTIAL",
            Self::Health => "HEALTH",
            Self::Identifier => "IDENTIFIER",
            Self::BusinessMetric => "BUSINESS_METRIC",
            Self::Geographic => "GEOGRAPHIC",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn all() -> &'static [DataType] {
        &[
            Self::Pii,
            Self::Financial,
            Self::Credential,
            Self::Health,
            Self::Identifier,
            Self::BusinessMetric,
            Self::Geographic,
            Self::Unknown,
        ]
    }

    /// Human-readable risk factors carried by this category.
    pub fn risk_factors(&self) -> &'static [&'static str] {
        match self {
            Self::Pii => &["Contains personally identifiable information"],
            Self::Financial => &["Contains financial data requiring protection"],
            Self::Credential => &[
                "Contains authentication secrets",
                "Exposure grants system access",
            ],
            Self::Health => &["Contains protected health information"],
            Self::Identifier => &["Identifiers can be joined to re-identify records"],
            Self::BusinessMetric => &["Contains commercially sensitive business figures"],
            Self::Geographic | Self::Unknown => &[],
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
