//! Content detector table.
//!
//! Order matters only for full ties (same fraction, same sensitivity), so
//! the most specific validators come first.

use datatier_core::config::{ContentDetectorConfig, DetectorKind};
use datatier_core::types::{DataType, Sensitivity};

fn detector(
    kind: DetectorKind,
    data_type: DataType,
    sensitivity: Sensitivity,
) -> ContentDetectorConfig {
    ContentDetectorConfig {
        name: kind.name().to_string(),
        kind,
        pattern: None,
        data_type,
        sensitivity,
        firing_threshold: None,
    }
}

/// Build the built-in content detector table.
pub fn build_detectors() -> Vec<ContentDetectorConfig> {
    use DataType::*;
    use Sensitivity::*;

    vec![
        detector(DetectorKind::Ssn, Pii, TopSecret),
        detector(DetectorKind::CreditCard, Financial, TopSecret),
        detector(DetectorKind::Iban, Financial, Restricted),
        detector(DetectorKind::Email, Pii, Confidential),
        detector(DetectorKind::Phone, Pii, Confidential),
        detector(DetectorKind::Ipv4, Pii, Confidential),
        detector(DetectorKind::Ipv6, Pii, Confidential),
        detector(DetectorKind::MacAddress, Pii, Confidential),
        detector(DetectorKind::PostalCode, Geographic, Public),
    ]
}
