//! # datatier-analysis
//!
//! Column sensitivity classification.
//!
//! Each column runs through two independent analyzers, a
//! [`FieldNameAnalyzer`] over its name and a [`ContentPatternMatcher`] over a
//! deterministic sample of its values. A [`RiskScorer`] then merges the two
//! signals into one verdict. [`DatasetClassifier`] fans columns out across
//! rayon workers and joins them into a [`DatasetClassificationReport`].

pub mod classifier;
pub mod content;
pub mod dataset;
pub mod field_name;
pub mod patterns;
pub mod scoring;

pub use classifier::{
    DatasetClassificationReport, DatasetClassifier, DatasetClassifierBuilder, ReportSummary,
};
pub use content::{ContentPatternMatcher, ContentScan, ContentSignal};
pub use dataset::{Column, Dataset, Scalar};
pub use field_name::{FieldNameAnalyzer, NameSignal};
pub use scoring::{ColumnClassification, Evidence, EvidenceSource, MaskingStrategy, RiskScorer};
