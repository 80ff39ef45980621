use chrono::{DateTime, Utc};

/// Bracketed so the prefix reads as one token in the space-joined line.
pub const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d %H:%M:%S]";

/// Renders the file-sink prefix, always in UTC.
#[must_use]
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
