//! Serde helpers for loosely typed tracker JSON.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, a number or null, keeping the textual form.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    match v {
        Some(Value::String(v)) => Ok(Some(v)),
        Some(Value::Number(v)) => Ok(Some(v.to_string())),
        None => Ok(None),
        _ => Err(serde::de::Error::custom("expected number or string")),
    }
}
