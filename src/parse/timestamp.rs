//! Serde helpers for the task tool's timestamps.
//!
//! Exports use the compact form `20240110T120000Z`; RFC 3339 and naive ISO
//! timestamps (taken as UTC) are accepted as well.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, COMPACT_FORMAT) {
        return Some(naive.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_ISO_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(COMPACT_FORMAT).to_string()
}

pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(dt))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_some(&format_timestamp(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|raw| {
            parse_timestamp(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
        })
        .transpose()
    }
}
