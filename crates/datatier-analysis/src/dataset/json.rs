//! JSON ingestion for datasets.

use datatier_core::errors::InputError;
use serde_json::{Map, Value};

use super::{Column, Dataset, Scalar};

impl Dataset {
    /// Build a dataset from an array of row objects.
    ///
    /// Columns appear in first-seen key order. A key missing from a row is
    /// a null cell in that row.
    pub fn from_json_records(id: impl Into<String>, records: &Value) -> Result<Self, InputError> {
        let rows = records
            .as_array()
            .ok_or_else(|| InputError::Malformed("expected an array of row objects".to_string()))?;

        let mut names: Vec<String> = Vec::new();
        for (row, record) in rows.iter().enumerate() {
            let object = as_object(record, row)?;
            for key in object.keys() {
                if !names.iter().any(|n| n == key) {
                    names.push(key.clone());
                }
            }
        }

        let mut dataset = Dataset::new(id);
        for name in names {
            let mut values = Vec::with_capacity(rows.len());
            for (row, record) in rows.iter().enumerate() {
                let value = match as_object(record, row)?.get(&name) {
                    Some(cell) => scalar_from_json(cell, &name, row)?,
                    None => None,
                };
                values.push(value);
            }
            dataset.push_column(Column::new(name, values));
        }
        Ok(dataset)
    }

    /// Build a dataset from an object mapping column names to value arrays.
    pub fn from_json_columns(id: impl Into<String>, columns: &Value) -> Result<Self, InputError> {
        let object = columns.as_object().ok_or_else(|| {
            InputError::Malformed("expected an object of column name to value array".to_string())
        })?;

        let mut dataset = Dataset::new(id);
        for (name, cells) in object {
            let cells = cells.as_array().ok_or_else(|| {
                InputError::Malformed(format!("column '{name}' is not an array"))
            })?;
            let values = cells
                .iter()
                .enumerate()
                .map(|(row, cell)| scalar_from_json(cell, name, row))
                .collect::<Result<Vec<_>, _>>()?;
            dataset.push_column(Column::new(name.clone(), values));
        }
        Ok(dataset)
    }
}

fn as_object(record: &Value, row: usize) -> Result<&Map<String, Value>, InputError> {
    record
        .as_object()
        .ok_or_else(|| InputError::Malformed(format!("row {row} is not an object")))
}

fn scalar_from_json(value: &Value, column: &str, row: usize) -> Result<Option<Scalar>, InputError> {
    let scalar = match value {
        Value::Null => return Ok(None),
        Value::Bool(b) => Scalar::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Scalar::Integer(i),
            // Above i64::MAX: keep the exact digits, a float would round them.
            None if n.is_u64() => Scalar::Text(n.to_string()),
            None => match n.as_f64() {
                Some(f) => Scalar::Float(f),
                None => Scalar::Text(n.to_string()),
            },
        },
        Value::String(s) => Scalar::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => {
            return Err(InputError::NonScalarValue {
                column: column.to_string(),
                row,
                kind: if value.is_array() { "array" } else { "object" }.to_string(),
            });
        }
    };
    Ok(Some(scalar))
}
