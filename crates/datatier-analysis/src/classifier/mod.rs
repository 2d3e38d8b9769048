//! Dataset classification: per-column fan-out on rayon, then one join.

pub mod report;

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use datatier_core::config::ClassifierConfig;
use datatier_core::errors::{ClassifyError, ColumnError, ConfigError};
use datatier_core::tracing::metrics;
use datatier_core::traits::{Cancellable, CancellationToken, ValueDetector};
use datatier_core::types::{DataType, Sensitivity};
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use crate::content::detectors::failed_builtin_patterns;
use crate::content::{ContentDetector, ContentPatternMatcher, ContentSignal, ValueProfile};
use crate::dataset::{Column, Dataset};
use crate::field_name::{FieldNameAnalyzer, NameSignal};
use crate::patterns::PatternTables;
use crate::scoring::{ColumnClassification, RiskScorer};

pub use self::report::{DatasetClassificationReport, ReportSummary};

/// Classifies datasets with a configuration fixed at construction.
///
/// Holds no per-call state; one instance can serve concurrent callers.
pub struct DatasetClassifier {
    analyzer: FieldNameAnalyzer,
    matcher: ContentPatternMatcher,
    scorer: RiskScorer,
    pool: Option<rayon::ThreadPool>,
}

impl DatasetClassifier {
    /// Validate `config` and compile its tables.
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClassifierConfig) -> DatasetClassifierBuilder {
        DatasetClassifierBuilder {
            config,
            custom: Vec::new(),
        }
    }

    pub fn classify(
        &self,
        dataset: &Dataset,
    ) -> Result<DatasetClassificationReport, ClassifyError> {
        self.classify_with_cancellation(dataset, &CancellationToken::new())
    }

    /// Classify every column. If `token` is cancelled before the join
    /// completes, all partial results are dropped.
    pub fn classify_with_cancellation<C>(
        &self,
        dataset: &Dataset,
        token: &C,
    ) -> Result<DatasetClassificationReport, ClassifyError>
    where
        C: Cancellable + Sync,
    {
        dataset.validate()?;

        let span = info_span!(
            metrics::CLASSIFY_SPAN,
            { metrics::DATASET_ID } = %dataset.id,
            { metrics::COLUMN_COUNT } = dataset.column_count(),
            { metrics::DEGRADED_COUNT } = tracing::field::Empty,
            { metrics::MIXED_SIGNAL_COUNT } = tracing::field::Empty,
            { metrics::OVERALL_SENSITIVITY } = tracing::field::Empty,
            { metrics::CLASSIFY_DURATION_MS } = tracing::field::Empty,
        );
        let _guard = span.enter();
        let start = Instant::now();

        let run = || {
            dataset
                .columns
                .par_iter()
                .map(|column| {
                    // Rayon workers do not inherit the caller's current span.
                    let _entered = span.enter();
                    if token.is_cancelled() {
                        return Err(ClassifyError::Cancelled);
                    }
                    Ok(self.classify_column(column))
                })
                .collect::<Result<Vec<_>, ClassifyError>>()
        };
        let columns = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }?;
        if token.is_cancelled() {
            info!("classification cancelled");
            return Err(ClassifyError::Cancelled);
        }

        let report = DatasetClassificationReport::aggregate(dataset.id.clone(), columns);
        let mixed = report.columns.iter().filter(|c| c.mixed_signal).count();

        span.record(metrics::DEGRADED_COUNT, report.degraded_columns.len());
        span.record(metrics::MIXED_SIGNAL_COUNT, mixed);
        span.record(
            metrics::OVERALL_SENSITIVITY,
            tracing::field::display(report.overall_sensitivity),
        );
        span.record(
            metrics::CLASSIFY_DURATION_MS,
            start.elapsed().as_millis() as u64,
        );
        info!(
            overall_confidence = report.overall_confidence,
            automation_ready = report.automation_ready,
            "dataset classified"
        );
        Ok(report)
    }

    /// Classify one column in isolation. Detector failures and panics
    /// degrade this column only.
    pub fn classify_column(&self, column: &Column) -> ColumnClassification {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.evaluate(column)));
        let result = match outcome {
            Ok(result) => result,
            Err(payload) => Err(ColumnError::Panicked {
                column: column.name.clone(),
                message: panic_message(payload.as_ref()),
            }),
        };

        match result {
            Ok((name, content, profile)) => {
                let classification =
                    self.scorer
                        .score(&column.name, name.as_ref(), content.as_ref(), profile);
                debug!(
                    column = %classification.column_name,
                    sensitivity = %classification.sensitivity,
                    data_type = %classification.data_type,
                    confidence = classification.confidence,
                    mixed_signal = classification.mixed_signal,
                    automation_ready = classification.automation_ready,
                    "column classified"
                );
                classification
            }
            Err(error) => {
                warn!(column = %column.name, error = %error, "column degraded");
                let profile = panic::catch_unwind(AssertUnwindSafe(|| {
                    ValueProfile::build(&column.values, self.matcher.sample_size())
                }))
                .unwrap_or_else(|_| ValueProfile::empty(column.len()));
                self.scorer.degraded(&column.name, &error, profile)
            }
        }
    }

    fn evaluate(
        &self,
        column: &Column,
    ) -> Result<(Option<NameSignal>, Option<ContentSignal>, ValueProfile), ColumnError> {
        let name = self.analyzer.analyze(&column.name);
        let scan = self
            .matcher
            .scan(&column.values)
            .map_err(|source| ColumnError::Detection {
                column: column.name.clone(),
                source,
            })?;
        let profile = ValueProfile::build(&column.values, self.matcher.sample_size());
        Ok((name, scan.best, profile))
    }

    pub fn field_name_analyzer(&self) -> &FieldNameAnalyzer {
        &self.analyzer
    }

    pub fn content_matcher(&self) -> &ContentPatternMatcher {
        &self.matcher
    }

    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }
}

struct CustomDetector {
    detector: Arc<dyn ValueDetector>,
    data_type: DataType,
    sensitivity: Sensitivity,
    firing_threshold: Option<f64>,
}

/// Adds caller-supplied detectors on top of a configuration.
pub struct DatasetClassifierBuilder {
    config: ClassifierConfig,
    custom: Vec<CustomDetector>,
}

impl DatasetClassifierBuilder {
    /// Register a detector evaluated after the table detectors, using the
    /// default firing threshold.
    pub fn detector(
        self,
        detector: impl ValueDetector + 'static,
        data_type: DataType,
        sensitivity: Sensitivity,
    ) -> Self {
        self.push(Arc::new(detector), data_type, sensitivity, None)
    }

    pub fn detector_with_threshold(
        self,
        detector: impl ValueDetector + 'static,
        data_type: DataType,
        sensitivity: Sensitivity,
        firing_threshold: f64,
    ) -> Self {
        self.push(
            Arc::new(detector),
            data_type,
            sensitivity,
            Some(firing_threshold),
        )
    }

    fn push(
        mut self,
        detector: Arc<dyn ValueDetector>,
        data_type: DataType,
        sensitivity: Sensitivity,
        firing_threshold: Option<f64>,
    ) -> Self {
        self.custom.push(CustomDetector {
            detector,
            data_type,
            sensitivity,
            firing_threshold,
        });
        self
    }

    pub fn build(self) -> Result<DatasetClassifier, ConfigError> {
        self.config.validate()?;

        let failed = failed_builtin_patterns();
        if !failed.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "builtin content patterns".to_string(),
                message: format!("failed to compile: {}", failed.join(", ")),
            });
        }

        let tables = PatternTables::from_config(&self.config);
        let analyzer = FieldNameAnalyzer::new(&tables.field_name_rules, &tables.name_suppressions);
        let mut matcher =
            ContentPatternMatcher::from_table(&tables.content_detectors, &self.config.sampling)?;

        let default_threshold = self.config.sampling.effective_firing_threshold();
        for custom in self.custom {
            let name = custom.detector.name().to_string();
            let field = format!("custom detector '{name}'");
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "name must not be blank".to_string(),
                });
            }
            if matcher.detectors().iter().any(|d| d.name() == name) {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "name collides with an existing detector".to_string(),
                });
            }
            let threshold = custom.firing_threshold.unwrap_or(default_threshold);
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: format!(
                        "firing threshold must be between 0.0 and 1.0, got {threshold}"
                    ),
                });
            }
            matcher.push(ContentDetector::new(
                custom.detector,
                custom.data_type,
                custom.sensitivity,
                threshold,
            ));
        }

        let pool = match self.config.execution.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("datatier-classify-{i}"))
                    .build()
                    .map_err(|e| ConfigError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        Ok(DatasetClassifier {
            analyzer,
            matcher,
            scorer: RiskScorer::new(&self.config.scoring),
            pool,
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
