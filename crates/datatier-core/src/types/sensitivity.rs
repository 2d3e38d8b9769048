//! Sensitivity tiers.

use serde::{Deserialize, Serialize};

/// Data sensitivity tier, ordered from least to most restrictive.
///
/// Every tie-break in the engine resolves toward the greater tier, so the
/// derived `Ord` (declaration order) is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sensitivity {
    Public,
    Internal,
    Confidential,
    Restricted,
    TopSecret,
}

impl Sensitivity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Internal => "INTERNAL",
            Self::Confidential => "CONFIDENTIAL",
            Self::Restricted => "RESTRICTED",
            Self::TopSecret => "TOP_SECRET",
        }
    }

    /// All tiers in ascending order.
    pub fn all() -> &'static [Sensitivity] {
        &[
            Self::Public,
            Self::Internal,
            Self::Confidential,
            Self::Restricted,
            Self::TopSecret,
        ]
    }

    /// The most restrictive tier. Used for columns whose classification failed.
    pub const fn most_restrictive() -> Self {
        Self::TopSecret
    }

    /// Whether this tier needs protection beyond access control.
    pub fn is_high_risk(&self) -> bool {
        *self >= Self::Confidential
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
