//! Structurally invalid dataset input.

use super::error_code::{self, ErrorCode};

/// Errors raised when a dataset cannot be classified at all.
/// Fatal to the whole `classify()` call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Dataset '{dataset}' has no columns")]
    EmptyDataset { dataset: String },

    #[error("Column at index {index} has a blank name")]
    BlankColumnName { index: usize },

    #[error("Duplicate column name: {name}")]
    DuplicateColumn { name: String },

    #[error("Column '{column}' has {found} values, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' row {row}: expected a scalar or null, found {kind}")]
    NonScalarValue {
        column: String,
        row: usize,
        kind: String,
    },

    #[error("Malformed dataset: {0}")]
    Malformed(String),
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
