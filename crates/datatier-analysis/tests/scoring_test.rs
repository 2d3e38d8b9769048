//! Risk scorer resolution tests.

use datatier_analysis::content::{ContentSignal, ValueProfile};
use datatier_analysis::field_name::NameSignal;
use datatier_analysis::scoring::{EvidenceSource, MaskingStrategy, RiskScorer};
use datatier_core::config::ScoringConfig;
use datatier_core::errors::{ColumnError, DetectionError};
use datatier_core::types::{DataType, Sensitivity};

fn name(sensitivity: Sensitivity, data_type: DataType, confidence: f64) -> NameSignal {
    NameSignal {
        rule: "rule".to_string(),
        matched_keyword: "kw".to_string(),
        data_type,
        sensitivity,
        confidence,
        suppression: None,
    }
}

fn content(sensitivity: Sensitivity, data_type: DataType, fraction: f64) -> ContentSignal {
    ContentSignal {
        detector: "detector".to_string(),
        data_type,
        sensitivity,
        match_fraction: fraction,
        sampled: 10,
        confidence: fraction,
    }
}

fn profile() -> ValueProfile {
    ValueProfile::empty(0)
}

/// No signal at all: PUBLIC at the floor, not ready.
#[test]
fn test_no_signal_floor() {
    let c = RiskScorer::default().score("notes", None, None, profile());
    assert_eq!(c.sensitivity, Sensitivity::Public);
    assert_eq!(c.data_type, DataType::Unknown);
    assert_eq!(c.confidence, 0.2);
    assert!(!c.automation_ready);
    assert!(c.evidence.is_empty());
    assert_eq!(c.masking_strategy, MaskingStrategy::NoMasking);
}

/// A lone signal is discounted by the single-source penalty.
#[test]
fn test_single_source_penalty() {
    let scorer = RiskScorer::default();

    let n = name(Sensitivity::Internal, DataType::Identifier, 0.8);
    let c = scorer.score("customer_id", Some(&n), None, profile());
    assert!((c.confidence - 0.68).abs() < 1e-9);
    assert!(!c.automation_ready, "0.68 is below the 0.70 threshold");
    assert_eq!(c.evidence.len(), 1);
    assert_eq!(c.evidence[0].source, EvidenceSource::FieldName);
    assert_eq!(c.evidence[0].confidence, 0.8, "evidence keeps the raw confidence");

    let k = content(Sensitivity::Confidential, DataType::Pii, 1.0);
    let c = scorer.score("col_7", None, Some(&k), profile());
    assert!((c.confidence - 0.85).abs() < 1e-9);
    assert!(c.automation_ready);
    assert_eq!(c.evidence[0].source, EvidenceSource::Content);
    assert_eq!(c.evidence[0].match_fraction, Some(1.0));
    assert_eq!(c.evidence[0].sample_size, Some(10));
}

/// Agreement adds the bonus to the mean, capped at 1.0.
#[test]
fn test_agreement_bonus() {
    let scorer = RiskScorer::default();
    let n = name(Sensitivity::Confidential, DataType::Pii, 0.7);
    let k = content(Sensitivity::Confidential, DataType::Pii, 0.8);
    let c = scorer.score("email", Some(&n), Some(&k), profile());
    assert!((c.confidence - 0.85).abs() < 1e-9);
    assert!(c.automation_ready);
    assert!(!c.mixed_signal);
    assert_eq!(c.evidence.len(), 2);
    assert_eq!(c.evidence[0].source, EvidenceSource::FieldName);
    assert_eq!(c.evidence[1].source, EvidenceSource::Content);

    let n = name(Sensitivity::TopSecret, DataType::Pii, 0.95);
    let k = content(Sensitivity::TopSecret, DataType::Pii, 0.9);
    let c = scorer.score("ssn", Some(&n), Some(&k), profile());
    assert_eq!(c.confidence, 1.0);
}

/// Agreement never scores below the stronger signal.
#[test]
fn test_agreement_never_below_stronger_signal() {
    let scorer = RiskScorer::default();
    let n = name(Sensitivity::Public, DataType::Geographic, 0.3);
    let k = content(Sensitivity::Public, DataType::Geographic, 1.0);
    let c = scorer.score("zip", Some(&n), Some(&k), profile());
    assert_eq!(c.confidence, 1.0);
}

/// Agreement takes the data type from content.
#[test]
fn test_agreement_uses_content_data_type() {
    let n = name(Sensitivity::Confidential, DataType::Pii, 0.7);
    let k = content(Sensitivity::Confidential, DataType::Financial, 0.9);
    let c = RiskScorer::default().score("x", Some(&n), Some(&k), profile());
    assert_eq!(c.data_type, DataType::Financial);
}

/// Disagreement picks the higher tier, uses the plain mean, and flags
/// every evidence entry.
#[test]
fn test_mixed_signal() {
    let n = name(Sensitivity::Internal, DataType::Identifier, 0.6);
    let k = content(Sensitivity::TopSecret, DataType::Financial, 0.8);
    let c = RiskScorer::default().score("id", Some(&n), Some(&k), profile());
    assert_eq!(c.sensitivity, Sensitivity::TopSecret);
    assert_eq!(c.data_type, DataType::Financial);
    assert!((c.confidence - 0.7).abs() < 1e-9);
    assert!(c.mixed_signal);
    assert!(!c.automation_ready);
    assert!(c.evidence.iter().all(|e| e.mixed_signal));
    assert_eq!(c.masking_strategy, MaskingStrategy::Tokenization);
    assert!(c.risk_factors.iter().any(|f| f.contains("disagree")));
}

/// Name can be the higher tier too.
#[test]
fn test_mixed_signal_name_higher() {
    let n = name(Sensitivity::TopSecret, DataType::Credential, 0.9);
    let k = content(Sensitivity::Confidential, DataType::Pii, 1.0);
    let c = RiskScorer::default().score("api_key", Some(&n), Some(&k), profile());
    assert_eq!(c.sensitivity, Sensitivity::TopSecret);
    assert_eq!(c.data_type, DataType::Credential);
    assert!(!c.automation_ready);
}

/// Thresholds come from configuration.
#[test]
fn test_configured_weights() {
    let scorer = RiskScorer::new(&ScoringConfig {
        automation_threshold: Some(0.5),
        single_source_penalty: Some(1.0),
        agreement_bonus: Some(0.0),
        no_match_confidence: Some(0.1),
    });
    let n = name(Sensitivity::Internal, DataType::Identifier, 0.6);
    let c = scorer.score("id", Some(&n), None, profile());
    assert_eq!(c.confidence, 0.6);
    assert!(c.automation_ready);

    let c = scorer.score("notes", None, None, profile());
    assert_eq!(c.confidence, 0.1);
    assert_eq!(scorer.automation_threshold(), 0.5);
}

/// A failed column is most restrictive with one error evidence entry.
#[test]
fn test_degraded_column() {
    let error = ColumnError::Detection {
        column: "blob".to_string(),
        source: DetectionError::DetectorFailed {
            detector: "custom".to_string(),
            message: "boom".to_string(),
        },
    };
    let c = RiskScorer::default().degraded("blob", &error, profile());
    assert_eq!(c.sensitivity, Sensitivity::TopSecret);
    assert_eq!(c.data_type, DataType::Unknown);
    assert_eq!(c.confidence, 0.0);
    assert_eq!(c.masking_strategy, MaskingStrategy::Tokenization);
    assert!(!c.automation_ready);
    assert!(c.degraded);
    assert_eq!(c.evidence.len(), 1);
    assert_eq!(c.evidence[0].source, EvidenceSource::Error);
    assert_eq!(c.evidence[0].rule, "DETECTION_ERROR");
    assert!(c.evidence[0].message.as_deref().unwrap().contains("boom"));
    assert!(c.evidence[0].sensitivity.is_none());
}

/// Masking is a fixed function of the tier.
#[test]
fn test_masking_table() {
    let table = [
        (Sensitivity::TopSecret, MaskingStrategy::Tokenization),
        (Sensitivity::Restricted, MaskingStrategy::EncryptionWithControlledAccess),
        (Sensitivity::Confidential, MaskingStrategy::SelectiveMasking),
        (Sensitivity::Internal, MaskingStrategy::AccessControlOnly),
        (Sensitivity::Public, MaskingStrategy::NoMasking),
    ];
    for (sensitivity, expected) in table {
        assert_eq!(MaskingStrategy::for_sensitivity(sensitivity), expected);
    }
    assert!(MaskingStrategy::Tokenization
        .recommended_action()
        .starts_with("IMMEDIATE TOKENIZATION"));
    assert!(MaskingStrategy::NoMasking
        .recommended_action()
        .starts_with("STANDARD HANDLING"));
    assert_eq!(
        serde_json::to_string(&MaskingStrategy::NoMasking).unwrap(),
        "\"NONE\""
    );
    assert_eq!(
        serde_json::to_string(&MaskingStrategy::EncryptionWithControlledAccess).unwrap(),
        "\"ENCRYPTION_WITH_CONTROLLED_ACCESS\""
    );
}
