//! Wire and storage format for timestamps.
//!
//! Timestamps are UTC with microsecond precision, rendered as fixed-width
//! RFC 3339 text (`2024-03-01T12:00:00.000000Z`). Fixed width keeps the
//! lexical order of the text equal to the chronological order, both in the
//! `messages` table and in JSON responses.
//!
//! The module doubles as a `#[serde(with = "...")]` adapter.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Current time, truncated to the precision that survives a round trip
/// through [`format`].
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn format(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn serialize<S>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format(at))
}

pub fn deserialize<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(d)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|at| at.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
