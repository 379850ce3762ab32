//! Forgiving deserializers for request payloads.
//!
//! Browser clients send ids and timestamps as numbers or strings and
//! amounts as numbers, numeric strings or nothing at all.

use crate::sheet::cell;
use serde::Deserialize;
use serde::de::{self, Deserializer};
use serde_json::Value;

/// Accept a string, number, boolean or null and keep its text form.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        // same text a stored cell reads back as, so `1.0` and `1` match
        v @ (Value::Null | Value::Number(_) | Value::Bool(_)) => Ok(cell::text(&v)),
        other => Err(de::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Accept a number, a numeric string, an empty string or null (zero).
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid amount: {s:?}"))),
        other => Err(de::Error::custom(format!("expected amount, found {other}"))),
    }
}
