//! Tabular input: named columns of nullable scalars.

mod json;

use std::borrow::Cow;

use datatier_core::errors::InputError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Render the value the way detectors see it. Text is trimmed; a value
    /// that renders empty is treated as null.
    pub fn render(&self) -> Option<Cow<'_, str>> {
        let rendered = match self {
            Self::Text(s) => Cow::Borrowed(s.trim()),
            Self::Integer(i) => Cow::Owned(i.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        };
        (!rendered.is_empty()).then_some(rendered)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A named column. `None` is a null cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<Scalar>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<Scalar>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// A column with no null cells.
    pub fn from_values<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Self::new(name, values.into_iter().map(|v| Some(v.into())).collect())
    }

    /// A column of `len` null cells.
    pub fn nulls(name: impl Into<String>, len: usize) -> Self {
        Self::new(name, vec![None; len])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rendered non-null values in row order.
    pub fn rendered(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.values
            .iter()
            .filter_map(|v| v.as_ref().and_then(Scalar::render))
    }
}

/// A dataset to classify. Column order is preserved in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub columns: Vec<Column>,
}

impl Dataset {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Rows in the first column; `validate` guarantees all columns agree.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Reject input that cannot be classified column by column.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.columns.is_empty() {
            return Err(InputError::EmptyDataset {
                dataset: self.id.clone(),
            });
        }

        let expected = self.row_count();
        let mut seen = FxHashSet::default();
        for (index, column) in self.columns.iter().enumerate() {
            if column.name.trim().is_empty() {
                return Err(InputError::BlankColumnName { index });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(InputError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
            if column.len() != expected {
                return Err(InputError::RaggedColumns {
                    column: column.name.clone(),
                    expected,
                    found: column.len(),
                });
            }
        }
        Ok(())
    }
}
