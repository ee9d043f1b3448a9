//! Datetime deserialization helpers.
//!
//! tailscaled encodes `time.Time` as RFC3339 and uses the Go zero time
//! (`0001-01-01T00:00:00Z`) or `null` for "unset". Both map to `None` here.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer};

/// Deserializes `Option<DateTime<Utc>>` from RFC3339, `null`, or the Go zero time.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    let dt = DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}")))?;

    // Go 的零值时间表示"未设置"
    if dt.year() <= 1 {
        return Ok(None);
    }

    Ok(Some(dt))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "super::deserialize_optional")]
        at: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[test]
    fn go_zero_time_is_none() {
        let w: Wrapper = serde_json::from_str(r#"{"at":"0001-01-01T00:00:00Z"}"#).unwrap();
        assert!(w.at.is_none());
    }

    #[test]
    fn null_and_missing_are_none() {
        let w: Wrapper = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(w.at.is_none());
        let w: Wrapper = serde_json::from_str("{}").unwrap();
        assert!(w.at.is_none());
    }

    #[test]
    fn rfc3339_is_parsed() {
        let w: Wrapper = serde_json::from_str(r#"{"at":"2030-05-01T12:00:00Z"}"#).unwrap();
        assert_eq!(w.at.unwrap().to_rfc3339(), "2030-05-01T12:00:00+00:00");
    }
}
