//! Forgiving field deserializers for caller configuration.
//!
//! A malformed value for a recognized key falls back to "not supplied" so
//! the rest of the record still applies.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Optional field: `null` and invalid values both read as `None`.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    match T::deserialize(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(value = %raw, error = %err, "ignoring invalid option value");
            Ok(None)
        }
    }
}

/// Nested record: an invalid shape reads as the empty record.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    match T::deserialize(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(value = %raw, error = %err, "ignoring invalid option group");
            Ok(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "super::optional")]
        count: Option<u32>,
        #[serde(deserialize_with = "super::optional")]
        enabled: Option<bool>,
    }

    #[test]
    fn bad_value_reads_as_absent_without_touching_siblings() {
        let sample: Sample =
            serde_json::from_str(r#"{ "count": "many", "enabled": true }"#).expect("sample");
        assert_eq!(sample.count, None);
        assert_eq!(sample.enabled, Some(true));
    }

    #[test]
    fn null_and_missing_read_as_absent() {
        let sample: Sample = serde_json::from_str(r#"{ "count": null }"#).expect("sample");
        assert_eq!(sample.count, None);
        assert_eq!(sample.enabled, None);
    }
}
