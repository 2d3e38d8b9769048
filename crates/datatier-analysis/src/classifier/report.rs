//! Dataset-level report and summary statistics.

use std::collections::BTreeMap;

use datatier_core::types::Sensitivity;
use serde::{Deserialize, Serialize};

use crate::scoring::ColumnClassification;

/// Result of classifying one dataset. Columns keep input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetClassificationReport {
    pub dataset_id: String,
    pub columns: Vec<ColumnClassification>,
    /// Maximum column sensitivity.
    pub overall_sensitivity: Sensitivity,
    /// Mean column confidence.
    pub overall_confidence: f64,
    /// True only when every column is automation-ready.
    pub automation_ready: bool,
    pub degraded_columns: Vec<String>,
}

impl DatasetClassificationReport {
    pub(crate) fn aggregate(dataset_id: String, columns: Vec<ColumnClassification>) -> Self {
        let overall_sensitivity = columns
            .iter()
            .map(|c| c.sensitivity)
            .max()
            .unwrap_or(Sensitivity::Public);
        let overall_confidence = mean(columns.iter().map(|c| c.confidence));
        let automation_ready = !columns.is_empty() && columns.iter().all(|c| c.automation_ready);
        let degraded_columns = columns
            .iter()
            .filter(|c| c.degraded)
            .map(|c| c.column_name.clone())
            .collect();

        Self {
            dataset_id,
            columns,
            overall_sensitivity,
            overall_confidence,
            automation_ready,
            degraded_columns,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnClassification> {
        self.columns.iter().find(|c| c.column_name == name)
    }

    /// Columns that need a human decision, in input order.
    pub fn review_queue(&self) -> impl Iterator<Item = &ColumnClassification> {
        self.columns.iter().filter(|c| c.needs_review())
    }

    pub fn summary(&self) -> ReportSummary {
        let mut risk_distribution: BTreeMap<Sensitivity, usize> =
            Sensitivity::all().iter().map(|s| (*s, 0)).collect();
        for column in &self.columns {
            *risk_distribution.entry(column.sensitivity).or_default() += 1;
        }

        let automation_ready_fields = self.columns.iter().filter(|c| c.automation_ready).count();
        ReportSummary {
            total_fields: self.columns.len(),
            high_risk_fields: self.columns.iter().filter(|c| c.is_high_risk()).count(),
            automation_ready_fields,
            manual_review_fields: self.columns.len() - automation_ready_fields,
            mixed_signal_fields: self.columns.iter().filter(|c| c.mixed_signal).count(),
            degraded_fields: self.degraded_columns.len(),
            average_confidence: self.overall_confidence,
            risk_distribution,
        }
    }
}

/// Headline numbers for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_fields: usize,
    /// CONFIDENTIAL or above.
    pub high_risk_fields: usize,
    pub automation_ready_fields: usize,
    pub manual_review_fields: usize,
    pub mixed_signal_fields: usize,
    pub degraded_fields: usize,
    pub average_confidence: f64,
    /// Column count per tier; every tier is present.
    pub risk_distribution: BTreeMap<Sensitivity, usize>,
}

impl ReportSummary {
    /// Share of columns that can be handled without review, in [0, 1].
    pub fn automation_rate(&self) -> f64 {
        if self.total_fields == 0 {
            0.0
        } else {
            self.automation_ready_fields as f64 / self.total_fields as f64
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
