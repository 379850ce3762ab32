//! Cell-level helpers.
//!
//! A sheet row is a list of JSON values, the same loose typing a spreadsheet
//! cell has: text, number, boolean or blank.

use serde_json::Value;
use thiserror::Error;

/// One physical row of a sheet.
pub type Row = Vec<Value>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("row has {found} cells, expected {expected}")]
    TooShort { expected: usize, found: usize },

    #[error("column '{column}' is not a number: {value}")]
    NotANumber { column: &'static str, value: String },
}

/// Text form of a cell, as a spreadsheet would display it.
pub fn text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Numeric value of a cell. Blank cells read as zero.
pub fn number(cell: &Value, column: &'static str) -> Result<f64, RowError> {
    match cell {
        Value::Null => Ok(0.0),
        Value::Number(n) => n.as_f64().ok_or_else(|| RowError::NotANumber {
            column,
            value: n.to_string(),
        }),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| RowError::NotANumber {
            column,
            value: s.clone(),
        }),
        other => Err(RowError::NotANumber {
            column,
            value: other.to_string(),
        }),
    }
}

/// Build a numeric cell. Non-finite values become blank.
pub fn num(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

pub fn is_blank(cell: &Value) -> bool {
    match cell {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Key comparison used by every linear scan: the first cell's text form
/// must equal the key exactly.
pub fn key_matches(row: &[Value], key: &str) -> bool {
    row.first().is_some_and(|c| text(c) == key)
}

/// Ensure a row carries at least `expected` cells.
pub fn require_width(row: &[Value], expected: usize) -> Result<(), RowError> {
    if row.len() < expected {
        return Err(RowError::TooShort {
            expected,
            found: row.len(),
        });
    }
    Ok(())
}

/// Parse a raw text field (e.g. from CSV) into the most natural cell value.
pub fn from_raw(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => num(f),
        _ => Value::String(raw.to_string()),
    }
}
