//! Field decoders for values the server sends either as JSON strings or numbers.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer that may arrive as a number, a numeric string, or `null` (read as 0).
///
/// Fractional numbers are rounded; costs occasionally come back as `120.0`.
pub fn int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<i64>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Null => Some(0),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.round() as i64)),
        Value::String(text) => parse_int_text(text.trim()),
        _ => None,
    };

    parsed
        .map(T::from)
        .ok_or_else(|| D::Error::custom(format!("expected integer, got {value}")))
}

/// Text that may arrive as a string, a number or a boolean; `null` reads as empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(D::Error::custom(format!("expected text, got {other}"))),
    }
}

fn parse_int_text(text: &str) -> Option<i64> {
    if text.is_empty() {
        return Some(0);
    }
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(|float| float.round() as i64))
}
