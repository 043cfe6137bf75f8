//! `YYYY-MM-DD HH:MM:SS` timestamps.

use chrono::{NaiveDateTime, ParseResult};
use serde::Serializer;

/// chrono format string for the timestamps the service reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats `at` as `YYYY-MM-DD HH:MM:SS`, dropping sub-second precision.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a timestamp previously produced by [`format_timestamp`].
pub fn parse_timestamp(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
}

/// `serialize_with` adapter for [`NaiveDateTime`] fields.
pub fn serialize_timestamp<S>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&at.format(TIMESTAMP_FORMAT))
}
