//! Converters for the wire formats the admin API emits
//!
//! The backend serialises database rows with Python's `str()` fallback, so
//! timestamps usually arrive as `2024-03-05 14:30:00.123456` instead of
//! RFC 3339, dates as `2024-03-05`, and nullable text columns as `null`.
//! The helpers here accept every shape the backend is known to produce and
//! are wired into the snapshot types through `#[serde(with = ...)]`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Layouts tried, in order, for timestamps without an offset.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Layout used when writing timestamps back out.
const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a backend timestamp into the wall-clock time it names.
///
/// Offsets, when present, are dropped after the conversion: the dashboard
/// shows the time as the server recorded it.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_local());
    }
    // Python's isoformat() with a space separator keeps the offset as +03:00
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(parsed.naive_local());
    }
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(format!("Unrecognised timestamp '{}'", raw))
}

/// Parses a calendar date, accepting a full timestamp and keeping its date part.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => parse_timestamp(trimmed)
            .map(|timestamp| timestamp.date())
            .map_err(|_| format!("Unrecognised date '{}'", trimmed)),
    }
}

/// `#[serde(with = "converters::timestamp")]` for required timestamps.
pub mod timestamp {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_OUTPUT_FORMAT))
    }
}

/// `#[serde(with = "converters::option_timestamp")]` for nullable timestamps.
pub mod option_timestamp {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.collect_str(&timestamp.format(TIMESTAMP_OUTPUT_FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}

/// `#[serde(with = "converters::date")]` for calendar dates.
pub mod date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format("%Y-%m-%d"))
    }
}

/// Deserialises a nullable column as the type's default (`""`, `false`, ...).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
