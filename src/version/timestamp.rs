//! Modification timestamps as reported by the artifact store

use chrono::{DateTime, NaiveDateTime, Utc};

/// Textual timestamp format, e.g. `2024-01-02T15:04:05.000Z`
pub const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse a timestamp key. Returns None when the key does not follow [`TS_FORMAT`].
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TS_FORMAT).ok()
}

/// Format an instant as a timestamp key
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TS_FORMAT).to_string()
}
