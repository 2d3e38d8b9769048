//! End-to-end dataset classification tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use datatier_analysis::dataset::{Column, Dataset, Scalar};
use datatier_analysis::scoring::{EvidenceSource, MaskingStrategy};
use datatier_analysis::DatasetClassifier;
use datatier_core::config::ClassifierConfig;
use datatier_core::errors::{ClassifyError, ConfigError, DetectionError, InputError};
use datatier_core::traits::{Cancellable, CancellationToken, ValueDetector};
use datatier_core::types::{DataType, Sensitivity};
use serde_json::json;

fn classifier() -> DatasetClassifier {
    DatasetClassifier::new(ClassifierConfig::default()).unwrap()
}

fn ssn_column() -> Column {
    let mut values: Vec<&str> = vec![
        "123-45-6789",
        "234-56-7890",
        "345-67-8901",
        "456-78-9012",
        "567-89-0123",
        "678-90-1234",
        "789-01-2345",
        "135-79-2468",
        "246-80-1357",
    ];
    values.push("pending");
    Column::from_values("ssn", values)
}

fn card_column(name: &str) -> Column {
    Column::from_values(
        name,
        [
            "4111111111111111",
            "5500000000000004",
            "378282246310005",
            "6011111111111117",
            "4012888888881881",
            "5105105105105100",
            "4222222222222",
            "3530111333300000",
            "4111111111111112",
            "1234567812345678",
        ],
    )
}

struct Explodes;

impl ValueDetector for Explodes {
    fn name(&self) -> &str {
        "explodes"
    }

    fn matches(&self, value: &str) -> Result<bool, DetectionError> {
        if value == "boom" {
            panic!("detector blew up on {value}");
        }
        Ok(false)
    }
}

struct RejectsBinary;

impl ValueDetector for RejectsBinary {
    fn name(&self) -> &str {
        "rejects_binary"
    }

    fn matches(&self, value: &str) -> Result<bool, DetectionError> {
        if value.starts_with("0x") {
            return Err(DetectionError::UnsupportedValue {
                detector: "rejects_binary".to_string(),
                message: "binary payloads are not supported".to_string(),
            });
        }
        Ok(false)
    }
}

/// An SSN column where name and content agree.
#[test]
fn test_ssn_column_is_top_secret() {
    let dataset = Dataset::new("people").with_column(ssn_column());
    let report = classifier().classify(&dataset).unwrap();
    let ssn = report.column("ssn").unwrap();
    assert_eq!(ssn.sensitivity, Sensitivity::TopSecret);
    assert_eq!(ssn.data_type, DataType::Pii);
    assert!(ssn.confidence >= 0.9);
    assert_eq!(ssn.masking_strategy, MaskingStrategy::Tokenization);
    assert!(ssn.automation_ready);
    assert_eq!(ssn.evidence.len(), 2);
}

/// Numeric postal codes under a geographic name.
#[test]
fn test_zip_code_is_public() {
    let dataset = Dataset::new("addresses").with_column(Column::from_values(
        "zip_code",
        [94107_i64, 10001, 60601, 73301, 98101],
    ));
    let report = classifier().classify(&dataset).unwrap();
    let zip = &report.columns[0];
    assert_eq!(zip.sensitivity, Sensitivity::Public);
    assert_eq!(zip.data_type, DataType::Geographic);
    assert_eq!(zip.masking_strategy, MaskingStrategy::NoMasking);
}

/// Opaque identifiers: the name alone decides, discounted.
#[test]
fn test_customer_id_name_only() {
    let dataset = Dataset::new("crm").with_column(Column::from_values(
        "customer_id",
        ["a8f3k2", "x9z1q7", "m4n8p0", "b7c2d9"],
    ));
    let report = classifier().classify(&dataset).unwrap();
    let c = &report.columns[0];
    assert_eq!(c.sensitivity, Sensitivity::Internal);
    assert_eq!(c.data_type, DataType::Identifier);
    assert!((c.confidence - 0.8 * 0.85).abs() < 1e-9);
    assert!(!c.automation_ready);
}

/// Free text with a neutral name yields the floor verdict.
#[test]
fn test_free_text_notes() {
    let dataset = Dataset::new("crm").with_column(Column::from_values(
        "notes",
        ["Called about invoice", "Prefers post", "VIP"],
    ));
    let report = classifier().classify(&dataset).unwrap();
    let c = &report.columns[0];
    assert_eq!(c.sensitivity, Sensitivity::Public);
    assert_eq!(c.confidence, 0.2);
    assert!(!c.automation_ready);
    assert!(!report.automation_ready);
}

/// All-null column: name-only classification, no content evidence.
#[test]
fn test_all_null_email() {
    let dataset = Dataset::new("crm").with_column(Column::nulls("contact_email", 4));
    let report = classifier().classify(&dataset).unwrap();
    let c = &report.columns[0];
    assert_eq!(c.sensitivity, Sensitivity::Confidential);
    assert!((c.confidence - 0.9 * 0.85).abs() < 1e-9);
    assert_eq!(c.evidence.len(), 1);
    assert_eq!(c.evidence[0].source, EvidenceSource::FieldName);
    assert_eq!(c.profile.null_count, 4);
}

/// Card numbers hiding under a generic id name.
#[test]
fn test_card_numbers_under_id_are_mixed() {
    let dataset = Dataset::new("orders").with_column(card_column("id"));
    let report = classifier().classify(&dataset).unwrap();
    let c = &report.columns[0];
    assert_eq!(c.sensitivity, Sensitivity::TopSecret);
    assert!(c.mixed_signal);
    assert!(!c.automation_ready);
    assert!((c.confidence - 0.7).abs() < 1e-9);
    assert!(c.evidence.iter().all(|e| e.mixed_signal));
}

/// One result per column, in input order; overall figures follow the columns.
#[test]
fn test_report_completeness_and_aggregation() {
    let dataset = Dataset::new("mixed")
        .with_column(Column::from_values(
            "notes",
            ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"],
        ))
        .with_column(ssn_column())
        .with_column(Column::from_values(
            "customer_id",
            ["k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9", "k0"],
        ))
        .with_column(card_column("card_number"));
    let report = classifier().classify(&dataset).unwrap();

    let names: Vec<_> = report.columns.iter().map(|c| c.column_name.as_str()).collect();
    assert_eq!(names, ["notes", "ssn", "customer_id", "card_number"]);
    assert_eq!(report.dataset_id, "mixed");
    assert_eq!(report.overall_sensitivity, Sensitivity::TopSecret);

    let mean = report.columns.iter().map(|c| c.confidence).sum::<f64>() / 4.0;
    assert!((report.overall_confidence - mean).abs() < 1e-12);
    assert!(!report.automation_ready);
    assert!(report.degraded_columns.is_empty());

    let summary = report.summary();
    assert_eq!(summary.total_fields, 4);
    assert_eq!(summary.high_risk_fields, 2);
    assert_eq!(summary.risk_distribution[&Sensitivity::TopSecret], 2);
    assert_eq!(summary.risk_distribution[&Sensitivity::Restricted], 0);
    assert_eq!(summary.risk_distribution.len(), 5);
    assert_eq!(
        summary.automation_ready_fields + summary.manual_review_fields,
        summary.total_fields
    );
    assert_eq!(report.review_queue().count(), summary.manual_review_fields);
}

/// Same input and configuration produce byte-identical reports.
#[test]
fn test_deterministic_serialization() {
    let dataset = Dataset::new("d")
        .with_column(ssn_column())
        .with_column(card_column("id"))
        .with_column(Column::from_values(
            "zip",
            ["94107", "10001", "x", "60601", "y", "73301", "z", "98101", "w", "11211"],
        ));
    let c = classifier();
    let first = serde_json::to_string(&c.classify(&dataset).unwrap()).unwrap();
    let second = serde_json::to_string(&c.classify(&dataset).unwrap()).unwrap();
    assert_eq!(first, second);

    let fresh = serde_json::to_string(&classifier().classify(&dataset).unwrap()).unwrap();
    assert_eq!(first, fresh);
}

/// Reports round-trip through JSON.
#[test]
fn test_report_json_roundtrip() {
    let dataset = Dataset::new("d").with_column(ssn_column());
    let report = classifier().classify(&dataset).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["columns"][0]["sensitivity"], "TOP_SECRET");
    assert_eq!(json["columns"][0]["masking_strategy"], "TOKENIZATION");
    assert_eq!(json["columns"][0]["evidence"][0]["source"], "FIELD_NAME");
    let back: datatier_analysis::DatasetClassificationReport =
        serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

/// A panicking detector degrades its own column and nothing else.
#[test]
fn test_panicking_detector_degrades_one_column() {
    let classifier = DatasetClassifier::builder(ClassifierConfig::default())
        .detector(Explodes, DataType::Unknown, Sensitivity::Internal)
        .build()
        .unwrap();
    let dataset = Dataset::new("d")
        .with_column(Column::from_values("payload", ["ok", "boom", "ok"]))
        .with_column(Column::from_values("email", ["a@b.io", "c@d.io", "e@f.io"]));

    let report = classifier.classify(&dataset).unwrap();
    let payload = &report.columns[0];
    assert!(payload.degraded);
    assert_eq!(payload.sensitivity, Sensitivity::TopSecret);
    assert_eq!(payload.confidence, 0.0);
    assert_eq!(payload.data_type, DataType::Unknown);
    assert_eq!(payload.evidence.len(), 1);
    assert_eq!(payload.evidence[0].source, EvidenceSource::Error);
    assert_eq!(payload.evidence[0].rule, "DETECTOR_PANIC");
    assert_eq!(payload.profile.non_null_count, 3);

    let email = &report.columns[1];
    assert!(!email.degraded);
    assert_eq!(email.sensitivity, Sensitivity::Confidential);
    assert!(email.automation_ready);

    assert_eq!(report.degraded_columns, ["payload"]);
    assert_eq!(report.overall_sensitivity, Sensitivity::TopSecret);
    assert!(!report.automation_ready);
    assert_eq!(report.summary().degraded_fields, 1);
}

/// A detector error degrades the column with the error's code.
#[test]
fn test_detector_error_degrades_column() {
    let classifier = DatasetClassifier::builder(ClassifierConfig::default())
        .detector(RejectsBinary, DataType::Unknown, Sensitivity::Internal)
        .build()
        .unwrap();
    let dataset = Dataset::new("d").with_column(Column::from_values("blob", ["0xdeadbeef"]));
    let report = classifier.classify(&dataset).unwrap();
    let c = &report.columns[0];
    assert!(c.degraded);
    assert_eq!(c.evidence[0].rule, "DETECTION_ERROR");
    assert!(c.evidence[0]
        .message
        .as_deref()
        .unwrap()
        .contains("binary payloads"));
}

/// Custom detectors contribute like table detectors.
#[test]
fn test_custom_detector_fires() {
    struct Badge;
    impl ValueDetector for Badge {
        fn name(&self) -> &str {
            "badge"
        }
        fn matches(&self, value: &str) -> Result<bool, DetectionError> {
            Ok(value.starts_with("BDG-"))
        }
    }

    let classifier = DatasetClassifier::builder(ClassifierConfig::default())
        .detector_with_threshold(Badge, DataType::Identifier, Sensitivity::Restricted, 0.5)
        .build()
        .unwrap();
    let dataset =
        Dataset::new("d").with_column(Column::from_values("col_3", ["BDG-1", "BDG-2", "x"]));
    let c = &classifier.classify(&dataset).unwrap().columns[0];
    assert_eq!(c.sensitivity, Sensitivity::Restricted);
    assert_eq!(c.evidence[0].rule, "badge");
}

/// Custom detector names must not collide with table detectors.
#[test]
fn test_custom_detector_name_collision() {
    struct FakeEmail;
    impl ValueDetector for FakeEmail {
        fn name(&self) -> &str {
            "email"
        }
        fn matches(&self, _value: &str) -> Result<bool, DetectionError> {
            Ok(false)
        }
    }

    let result = DatasetClassifier::builder(ClassifierConfig::default())
        .detector(FakeEmail, DataType::Pii, Sensitivity::Confidential)
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

/// Structurally invalid datasets fail the whole call.
#[test]
fn test_invalid_input_is_rejected() {
    let c = classifier();

    let empty = Dataset::new("empty");
    assert!(matches!(
        c.classify(&empty),
        Err(ClassifyError::Input(InputError::EmptyDataset { .. }))
    ));

    let ragged = Dataset::new("ragged")
        .with_column(Column::from_values("a", ["1", "2"]))
        .with_column(Column::from_values("b", ["1"]));
    assert!(matches!(
        c.classify(&ragged),
        Err(ClassifyError::Input(InputError::RaggedColumns { .. }))
    ));

    let duplicate = Dataset::new("dup")
        .with_column(Column::from_values("a", ["1"]))
        .with_column(Column::from_values("a", ["2"]));
    assert!(matches!(
        c.classify(&duplicate),
        Err(ClassifyError::Input(InputError::DuplicateColumn { .. }))
    ));

    let blank = Dataset::new("blank").with_column(Column::from_values("  ", ["1"]));
    assert!(matches!(
        c.classify(&blank),
        Err(ClassifyError::Input(InputError::BlankColumnName { index: 0 }))
    ));
}

/// Columns with no rows are valid and classify by name.
#[test]
fn test_zero_row_dataset() {
    let dataset = Dataset::new("schema_only")
        .with_column(Column::new("ssn", Vec::new()))
        .with_column(Column::new("notes", Vec::new()));
    let report = classifier().classify(&dataset).unwrap();
    assert_eq!(report.columns.len(), 2);
    assert_eq!(report.columns[0].sensitivity, Sensitivity::TopSecret);
    assert_eq!(report.columns[1].sensitivity, Sensitivity::Public);
}

/// A pre-cancelled token returns Cancelled and no partial report.
#[test]
fn test_cancellation() {
    let token = CancellationToken::new();
    token.cancel();
    let dataset = Dataset::new("d").with_column(ssn_column());
    let result = classifier().classify_with_cancellation(&dataset, &token);
    assert!(matches!(result, Err(ClassifyError::Cancelled)));

    let live = CancellationToken::new();
    assert!(classifier()
        .classify_with_cancellation(&dataset, &live)
        .is_ok());
}

/// Cancels as soon as the first column has been picked up.
struct CancelAfterFirstCheck {
    checks: AtomicUsize,
}

impl Cancellable for CancelAfterFirstCheck {
    fn is_cancelled(&self) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst) > 0
    }

    fn cancel(&self) {}
}

/// Cancellation that lands while columns are in flight still drops the
/// finished columns.
#[test]
fn test_cancellation_during_classification() {
    let token = CancelAfterFirstCheck {
        checks: AtomicUsize::new(0),
    };
    let dataset = Dataset::new("d").with_column(ssn_column());
    let result = classifier().classify_with_cancellation(&dataset, &token);
    assert!(matches!(result, Err(ClassifyError::Cancelled)));
    assert_eq!(
        token.checks.load(Ordering::SeqCst),
        2,
        "checked per column and after the join"
    );
}

/// A dedicated pool gives the same answers as the global one.
#[test]
fn test_dedicated_thread_pool() {
    let mut config = ClassifierConfig::default();
    config.execution.threads = Some(2);
    let pooled = DatasetClassifier::new(config).unwrap();

    let dataset = Dataset::new("d")
        .with_column(ssn_column())
        .with_column(card_column("id"));
    assert_eq!(
        pooled.classify(&dataset).unwrap(),
        classifier().classify(&dataset).unwrap()
    );
}

/// Invalid configuration is rejected at construction.
#[test]
fn test_invalid_config_rejected() {
    let mut config = ClassifierConfig::default();
    config.sampling.firing_threshold = Some(1.5);
    assert!(matches!(
        DatasetClassifier::new(config),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

/// JSON row records feed straight into classification.
#[test]
fn test_classify_json_records() {
    let records = json!([
        {"email": "a@b.io", "score": 10, "active": true},
        {"email": "c@d.io", "score": 12.5, "active": false},
        {"email": null, "score": null, "active": true}
    ]);
    let dataset = Dataset::from_json_records("json", &records).unwrap();
    let report = classifier().classify(&dataset).unwrap();
    assert_eq!(report.columns.len(), 3);
    assert_eq!(report.column("email").unwrap().profile.sampled, 2);
    assert_eq!(
        report.column("score").unwrap().sensitivity,
        Sensitivity::Public
    );
    assert_eq!(dataset.columns[1].values[1], Some(Scalar::Float(12.5)));
}

/// Integers too large for i64 keep every digit, so card numbers sent as
/// JSON numbers are still recognized.
#[test]
fn test_large_json_card_numbers_are_detected() {
    let columns = json!({
        "ref": [
            9_300_000_000_000_000_005u64,
            9_300_000_000_000_000_013u64,
            9_300_000_000_000_000_021u64,
            9_500_000_000_000_000_034u64,
            9_900_000_000_000_000_044u64
        ]
    });
    let dataset = Dataset::from_json_columns("cards", &columns).unwrap();
    let report = classifier().classify(&dataset).unwrap();
    let column = report.column("ref").unwrap();
    assert_eq!(column.sensitivity, Sensitivity::TopSecret);
    assert_eq!(column.data_type, DataType::Financial);
    assert_eq!(column.evidence[0].rule, "credit_card");
}
