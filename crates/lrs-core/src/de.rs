//! Lenient field deserializers for backend payloads.
//!
//! The backend is treated as best-effort: a field with the wrong JSON type is
//! read as absent instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a JSON number as `f64`; any other JSON type becomes `None`.
///
/// # Errors
///
/// Only fails if the input is not valid JSON at all.
pub fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

/// Reads a JSON number as `u64`; any other JSON type becomes `None`.
///
/// # Errors
///
/// Only fails if the input is not valid JSON at all.
pub fn count_or_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_u64))
}

/// Reads a JSON string or number as text. Empty strings, `null`, and
/// structured values become `None`.
///
/// # Errors
///
/// Only fails if the input is not valid JSON at all.
pub fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads a JSON boolean; anything else is `false`.
///
/// # Errors
///
/// Only fails if the input is not valid JSON at all.
pub fn flag_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}
