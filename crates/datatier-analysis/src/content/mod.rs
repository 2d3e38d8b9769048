//! Content pattern matching over a deterministic sample of column values.

pub mod checksum;
pub mod detectors;
pub mod profile;

use std::sync::Arc;

use datatier_core::config::{ContentDetectorConfig, SamplingConfig};
use datatier_core::errors::{ConfigError, DetectionError};
use datatier_core::traits::ValueDetector;
use datatier_core::types::{DataType, Sensitivity};
use serde::{Deserialize, Serialize};

use self::detectors::TableDetector;
use crate::dataset::Scalar;

pub use self::profile::{Cardinality, ValueProfile, ValueShape};

/// A detector with the classification it proposes when it fires.
#[derive(Clone)]
pub struct ContentDetector {
    pub data_type: DataType,
    pub sensitivity: Sensitivity,
    pub firing_threshold: f64,
    detector: Arc<dyn ValueDetector>,
}

impl ContentDetector {
    pub fn new(
        detector: Arc<dyn ValueDetector>,
        data_type: DataType,
        sensitivity: Sensitivity,
        firing_threshold: f64,
    ) -> Self {
        Self {
            data_type,
            sensitivity,
            firing_threshold,
            detector,
        }
    }

    pub fn name(&self) -> &str {
        self.detector.name()
    }
}

impl std::fmt::Debug for ContentDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentDetector")
            .field("name", &self.name())
            .field("data_type", &self.data_type)
            .field("sensitivity", &self.sensitivity)
            .field("firing_threshold", &self.firing_threshold)
            .finish()
    }
}

/// Match fraction of one detector over the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorScore {
    pub detector: String,
    pub matched: usize,
    pub fraction: f64,
    pub fired: bool,
}

/// The winning detector for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSignal {
    pub detector: String,
    pub data_type: DataType,
    pub sensitivity: Sensitivity,
    pub match_fraction: f64,
    pub sampled: usize,
    /// Equal to the match fraction.
    pub confidence: f64,
}

/// Full result of scanning one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentScan {
    pub sampled: usize,
    /// One entry per detector, in table order.
    pub scores: Vec<DetectorScore>,
    pub best: Option<ContentSignal>,
}

/// Evaluates every content detector against a column sample.
#[derive(Debug, Clone)]
pub struct ContentPatternMatcher {
    detectors: Vec<ContentDetector>,
    sample_size: usize,
}

impl ContentPatternMatcher {
    pub fn new(detectors: Vec<ContentDetector>, sample_size: usize) -> Self {
        Self {
            detectors,
            sample_size,
        }
    }

    /// Compile a detector table. Entries without their own firing threshold
    /// take `sampling.firing_threshold`.
    pub fn from_table(
        table: &[ContentDetectorConfig],
        sampling: &SamplingConfig,
    ) -> Result<Self, ConfigError> {
        let default_threshold = sampling.effective_firing_threshold();
        let detectors = table
            .iter()
            .map(|entry| {
                Ok(ContentDetector::new(
                    TableDetector::compile(entry)?.into_shared(),
                    entry.data_type,
                    entry.sensitivity,
                    entry.firing_threshold.unwrap_or(default_threshold),
                ))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self::new(detectors, sampling.effective_sample_size()))
    }

    /// Append a detector after the table entries.
    pub fn push(&mut self, detector: ContentDetector) {
        self.detectors.push(detector);
    }

    pub fn detectors(&self) -> &[ContentDetector] {
        &self.detectors
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Scan the first `sample_size` non-null values. The best detector is the
    /// one with the highest fraction at or above its threshold; ties go to
    /// higher sensitivity, then to table order.
    pub fn scan(&self, values: &[Option<Scalar>]) -> Result<ContentScan, DetectionError> {
        let sample = profile::sample(values, self.sample_size);
        let sampled = sample.len();

        let mut scores = Vec::with_capacity(self.detectors.len());
        let mut best: Option<(&ContentDetector, f64)> = None;

        for detector in &self.detectors {
            let mut matched = 0;
            for value in &sample {
                if detector.detector.matches(value)? {
                    matched += 1;
                }
            }
            let fraction = if sampled == 0 {
                0.0
            } else {
                matched as f64 / sampled as f64
            };
            let fired = matched > 0 && fraction >= detector.firing_threshold;

            if fired {
                let better = match best {
                    None => true,
                    Some((current, current_fraction)) => {
                        fraction > current_fraction
                            || (fraction == current_fraction
                                && detector.sensitivity > current.sensitivity)
                    }
                };
                if better {
                    best = Some((detector, fraction));
                }
            }

            scores.push(DetectorScore {
                detector: detector.name().to_string(),
                matched,
                fraction,
                fired,
            });
        }

        let best = best.map(|(detector, fraction)| ContentSignal {
            detector: detector.name().to_string(),
            data_type: detector.data_type,
            sensitivity: detector.sensitivity,
            match_fraction: fraction,
            sampled,
            confidence: fraction.min(1.0),
        });

        Ok(ContentScan {
            sampled,
            scores,
            best,
        })
    }
}
