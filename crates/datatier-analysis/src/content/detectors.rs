//! Built-in value validators.
//!
//! Every pattern is anchored: a value matches only if the whole rendered
//! value has the shape, never a substring of it.

use std::sync::{Arc, LazyLock};

use datatier_core::config::{ContentDetectorConfig, DetectorKind};
use datatier_core::errors::{ConfigError, DetectionError};
use datatier_core::traits::ValueDetector;
use regex::Regex;

use super::checksum::{iban_valid, luhn_valid};

macro_rules! value_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── SSN: NNN-NN-NNNN or NNN NN NNNN ─────────────────────────────────────────
value_pattern!(RE_SSN, r"^(\d{3})[- ](\d{2})[- ](\d{4})$");

// ── Card: 13-19 digits, optional space/dash grouping ───────────────────────
value_pattern!(RE_CARD, r"^\d[\d -]{11,24}\d$");

// ── IBAN (compact, upper-case) ─────────────────────────────────────────────
value_pattern!(RE_IBAN, r"^[A-Z]{2}\d{2}[A-Z0-9]{11,30}$");

value_pattern!(RE_EMAIL, r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$");

// ── Phone: NANP with optional +1 ───────────────────────────────────────────
value_pattern!(
    RE_PHONE,
    r"^(?:\+?1[-.\s]?)?(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}$"
);

value_pattern!(
    RE_IPV4,
    r"^(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)$"
);

// ── IPv6, full eight-group form ────────────────────────────────────────────
value_pattern!(RE_IPV6, r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$");

value_pattern!(RE_MAC_ADDRESS, r"^(?:[0-9A-Fa-f]{2}[:\-]){5}[0-9A-Fa-f]{2}$");

// ── US ZIP / ZIP+4 ─────────────────────────────────────────────────────────
value_pattern!(RE_POSTAL_CODE, r"^\d{5}(?:-\d{4})?$");

fn pattern_for(kind: DetectorKind) -> Option<&'static LazyLock<Option<Regex>>> {
    match kind {
        DetectorKind::Ssn => Some(&RE_SSN),
        DetectorKind::CreditCard => Some(&RE_CARD),
        DetectorKind::Iban => Some(&RE_IBAN),
        DetectorKind::Email => Some(&RE_EMAIL),
        DetectorKind::Phone => Some(&RE_PHONE),
        DetectorKind::Ipv4 => Some(&RE_IPV4),
        DetectorKind::Ipv6 => Some(&RE_IPV6),
        DetectorKind::MacAddress => Some(&RE_MAC_ADDRESS),
        DetectorKind::PostalCode => Some(&RE_POSTAL_CODE),
        DetectorKind::Regex => None,
    }
}

/// Built-in patterns that failed to compile. Always empty in a correct build.
pub fn failed_builtin_patterns() -> Vec<&'static str> {
    [
        DetectorKind::Ssn,
        DetectorKind::CreditCard,
        DetectorKind::Iban,
        DetectorKind::Email,
        DetectorKind::Phone,
        DetectorKind::Ipv4,
        DetectorKind::Ipv6,
        DetectorKind::MacAddress,
        DetectorKind::PostalCode,
    ]
    .into_iter()
    .filter(|kind| pattern_for(*kind).is_some_and(|re| re.is_none()))
    .map(|kind| kind.name())
    .collect()
}

fn is_ssn(value: &str) -> bool {
    let Some(caps) = RE_SSN.as_ref().and_then(|re| re.captures(value)) else {
        return false;
    };
    let (area, group, serial) = (&caps[1], &caps[2], &caps[3]);
    area != "000" && area != "666" && !area.starts_with('9') && group != "00" && serial != "0000"
}

fn is_credit_card(value: &str) -> bool {
    if !matches_pattern(&RE_CARD, value) {
        return false;
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    (13..=19).contains(&digits.len()) && luhn_valid(&digits)
}

fn is_iban(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    matches_pattern(&RE_IBAN, &compact) && iban_valid(&compact)
}

fn matches_pattern(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

/// Whether `value` has the shape of a built-in `kind`. `Regex` never
/// matches here; configured patterns go through [`TableDetector`].
pub fn matches_kind(kind: DetectorKind, value: &str) -> bool {
    match kind {
        DetectorKind::Ssn => is_ssn(value),
        DetectorKind::CreditCard => is_credit_card(value),
        DetectorKind::Iban => is_iban(value),
        DetectorKind::Regex => false,
        other => pattern_for(other).is_some_and(|re| matches_pattern(re, value)),
    }
}

/// A detector built from one content table entry.
#[derive(Debug)]
pub struct TableDetector {
    name: String,
    kind: DetectorKind,
    custom: Option<Regex>,
}

impl TableDetector {
    /// Compile a table entry. Regex entries compile their pattern here.
    pub fn compile(config: &ContentDetectorConfig) -> Result<Self, ConfigError> {
        let custom = match (config.kind, config.pattern.as_deref()) {
            (DetectorKind::Regex, Some(pattern)) => {
                Some(Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
                    field: format!("content_detectors.{}.pattern", config.name),
                    message: e.to_string(),
                })?)
            }
            (DetectorKind::Regex, None) => {
                return Err(ConfigError::InvalidValue {
                    field: format!("content_detectors.{}.pattern", config.name),
                    message: "regex detectors require a pattern".to_string(),
                });
            }
            _ => None,
        };
        Ok(Self {
            name: config.name.clone(),
            kind: config.kind,
            custom,
        })
    }

    pub fn into_shared(self) -> Arc<dyn ValueDetector> {
        Arc::new(self)
    }
}

impl ValueDetector for TableDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, value: &str) -> Result<bool, DetectionError> {
        Ok(match &self.custom {
            Some(re) => re.is_match(value),
            None => matches_kind(self.kind, value),
        })
    }
}
