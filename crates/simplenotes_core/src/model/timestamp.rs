//! Fixed-width ISO-8601 timestamp encoding.
//!
//! Stored timestamps use RFC 3339 in UTC with millisecond precision
//! (`2026-10-19T08:30:00.000Z`), so lexicographic and chronological order
//! agree for persisted values.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Formats a timestamp in the persisted wire shape.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses any RFC 3339 timestamp and normalizes it to UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value.trim()).map(|parsed| parsed.with_timezone(&Utc))
}

pub(crate) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(value))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .map_err(|err| serde::de::Error::custom(format!("invalid timestamp `{raw}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, parse_timestamp};
    use chrono::{TimeZone, Utc};

    #[test]
    fn format_is_fixed_width_millis_utc() {
        let value = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&value), "2026-01-02T03:04:05.000Z");
    }

    #[test]
    fn parse_normalizes_offsets_to_utc() {
        let parsed = parse_timestamp("2026-01-02T05:04:05.000+02:00").expect("valid offset");
        assert_eq!(format_timestamp(&parsed), "2026-01-02T03:04:05.000Z");
    }

    #[test]
    fn parse_rejects_non_timestamps() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
