//! Serde helpers for RFC 3339 timestamps in embedded resources.
//!
//! `DateTime<Utc>` already accepts RFC 3339 through chrono's own serde support.
//! These modules are for fields that need the format pinned, or for
//! `NaiveDateTime` fields, which chrono would otherwise expect without an
//! offset.
//!
//! ```rust
//! use chrono::{DateTime, NaiveDateTime, Utc};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Event {
//!     #[serde(with = "jsonhal::timestamp::rfc3339")]
//!     created_at: DateTime<Utc>,
//!     #[serde(with = "jsonhal::timestamp::naive_utc")]
//!     updated_at: NaiveDateTime,
//! }
//!
//! let event: Event = serde_json::from_str(
//!     r#"{"created_at":"2024-05-01T12:00:00Z","updated_at":"2024-05-01T14:30:00+02:00"}"#,
//! )
//! .unwrap();
//! assert_eq!(event.updated_at, event.created_at.naive_utc() + chrono::Duration::minutes(30));
//! ```

use chrono::{DateTime, ParseError, SecondsFormat, Utc};

/// Parses an RFC 3339 timestamp and normalizes it to UTC.
pub fn parse(input: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(input).map(|parsed| parsed.with_timezone(&Utc))
}

pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `#[serde(with = "jsonhal::timestamp::rfc3339")]` for `DateTime<Utc>`.
pub mod rfc3339 {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::borrow::Cow;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Cow::<str>::deserialize(deserializer)?;
        super::parse(&raw).map_err(de::Error::custom)
    }
}

/// `#[serde(with = "jsonhal::timestamp::naive_utc")]` for `NaiveDateTime`.
pub mod naive_utc {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::borrow::Cow;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(&value.and_utc()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Cow::<str>::deserialize(deserializer)?;
        super::parse(&raw)
            .map(|parsed| parsed.naive_utc())
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_normalizes_offset() {
        let parsed = parse("2024-05-01T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_non_rfc3339() {
        assert!(parse("2024-05-01 12:00:00").is_err());
        assert!(parse("yesterday").is_err());
    }

    #[test]
    fn test_format_uses_z_suffix() {
        let value = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format(&value), "2024-05-01T12:00:00Z");
    }
}
