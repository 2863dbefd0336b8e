//! Lenient field decoders for rows coming back from PostgREST.
//!
//! Nullable columns show up as an explicit `null`, which `#[serde(default)]`
//! alone doesn't cover.

use serde::de::{Deserialize, Deserializer, Error};
use serde_json::Value;

/// `null` and absent fields both become `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// ids are uuids on some tables and bigints on others
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("unexpected id: {}", other))),
    }
}
