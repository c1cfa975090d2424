pub mod csv_backup;
pub mod json_backup;
pub mod plain_text;
pub mod xml_backup;

use chrono::{DateTime, Utc};

/// Interpret a raw timestamp field: epoch milliseconds or RFC3339.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp_millis(millis);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
