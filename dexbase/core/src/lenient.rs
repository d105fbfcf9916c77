use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserializes a field that may be absent, `null` or of an unexpected shape.
///
/// Anything that does not decode into `T` becomes `None` instead of failing
/// the whole payload, leaving the shape check to the caller.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).ok())
}

/// Like [`deserialize`], falling back to `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    deserialize(deserializer).map(Option::unwrap_or_default)
}
