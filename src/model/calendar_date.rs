//! Serde codec for calendar dates exchanged with the score server.
//!
//! Incoming dates may be plain (`2024-01-01`, `2024-1-1`) or full RFC 3339
//! timestamps. Timestamps are moved to UTC before the time is dropped, so a
//! record always lands on its UTC calendar day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {}", raw)))
}

/// Parse a wire date into its UTC calendar day.
pub fn parse_utc_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    // Timestamps without an offset are already UTC
    for pat in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"].iter() {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pat) {
            return Some(naive.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a date the way the create endpoint expects it: `YYYY-M-D`, no padding.
pub fn to_wire_string(date: &NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}
