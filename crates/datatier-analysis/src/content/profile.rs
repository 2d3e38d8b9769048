//! Deterministic sampling and the value profile reported per column.

use std::borrow::Cow;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::dataset::Scalar;

/// Below this unique ratio a sampled column reads as categorical.
const CATEGORICAL_RATIO: f64 = 0.2;

/// The first `limit` rendered non-null values, in row order.
pub fn sample(values: &[Option<Scalar>], limit: usize) -> Vec<Cow<'_, str>> {
    values
        .iter()
        .filter_map(|v| v.as_ref().and_then(Scalar::render))
        .take(limit)
        .collect()
}

/// Length shape of the sampled values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueShape {
    Empty,
    FixedLength { length: usize },
    VariableLength { min: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Every sampled value is distinct.
    Unique,
    /// Few distinct values relative to the sample.
    Categorical,
    Mixed,
}

/// Descriptive statistics for one column. Never feeds the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueProfile {
    pub non_null_count: usize,
    pub null_count: usize,
    pub sampled: usize,
    pub unique_ratio: f64,
    pub shape: ValueShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<Cardinality>,
}

impl ValueProfile {
    pub fn build(values: &[Option<Scalar>], sample_size: usize) -> Self {
        let non_null_count = values
            .iter()
            .filter(|v| v.as_ref().and_then(Scalar::render).is_some())
            .count();
        let sampled = sample(values, sample_size);

        let lengths = sampled.iter().map(|v| v.chars().count());
        let shape = match (lengths.clone().min(), lengths.max()) {
            (Some(min), Some(max)) if min == max => ValueShape::FixedLength { length: min },
            (Some(min), Some(max)) => ValueShape::VariableLength { min, max },
            _ => ValueShape::Empty,
        };

        let (unique_ratio, cardinality) = if sampled.is_empty() {
            (0.0, None)
        } else {
            let distinct: FxHashSet<&str> = sampled.iter().map(|v| &**v).collect();
            let ratio = distinct.len() as f64 / sampled.len() as f64;
            let cardinality = if distinct.len() == sampled.len() {
                Cardinality::Unique
            } else if ratio < CATEGORICAL_RATIO {
                Cardinality::Categorical
            } else {
                Cardinality::Mixed
            };
            (ratio, Some(cardinality))
        };

        Self {
            non_null_count,
            null_count: values.len() - non_null_count,
            sampled: sampled.len(),
            unique_ratio,
            shape,
            cardinality,
        }
    }

    /// Profile of a column nothing could be read from.
    pub fn empty(rows: usize) -> Self {
        Self {
            non_null_count: 0,
            null_count: rows,
            sampled: 0,
            unique_ratio: 0.0,
            shape: ValueShape::Empty,
            cardinality: None,
        }
    }
}
