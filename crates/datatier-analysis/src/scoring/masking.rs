//! Masking strategy, a pure function of sensitivity.

use datatier_core::types::Sensitivity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaskingStrategy {
    Tokenization,
    EncryptionWithControlledAccess,
    SelectiveMasking,
    AccessControlOnly,
    #[serde(rename = "NONE")]
    NoMasking,
}

impl MaskingStrategy {
    pub fn for_sensitivity(sensitivity: Sensitivity) -> Self {
        match sensitivity {
            Sensitivity::TopSecret => Self::Tokenization,
            Sensitivity::Restricted => Self::EncryptionWithControlledAccess,
            Sensitivity::Confidential => Self::SelectiveMasking,
            Sensitivity::Internal => Self::AccessControlOnly,
            Sensitivity::Public => Self::NoMasking,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tokenization => "TOKENIZATION",
            Self::EncryptionWithControlledAccess => "ENCRYPTION_WITH_CONTROLLED_ACCESS",
            Self::SelectiveMasking => "SELECTIVE_MASKING",
            Self::AccessControlOnly => "ACCESS_CONTROL_ONLY",
            Self::NoMasking => "NONE",
        }
    }

    /// Handling instruction for downstream teams.
    pub fn recommended_action(&self) -> &'static str {
        match self {
            Self::Tokenization => "IMMEDIATE TOKENIZATION - Replace with irreversible tokens",
            Self::EncryptionWithControlledAccess => {
                "ENCRYPTION REQUIRED - Encrypt at rest and in transit"
            }
            Self::SelectiveMasking => "SELECTIVE MASKING - Mask sensitive portions",
            Self::AccessControlOnly => "ACCESS CONTROL - Restrict to internal personnel",
            Self::NoMasking => "STANDARD HANDLING - No special security measures required",
        }
    }
}

impl std::fmt::Display for MaskingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
