//! Date parsing and formatting helpers.

use anyhow::Context;
use chrono::NaiveDate;

/// Date format used by both CSV tables and the date picker: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a "YYYY-MM-DD" date. Anything after the date (a time of day such
/// as `2011-01-01 00:00:00` or `2011-01-01T06:00`) is ignored.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    let trimmed = s.trim();
    let date_part = trimmed
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .with_context(|| format!("invalid date {:?}", s))
}

/// Parse an optional date input; blank strings mean "no bound".
pub fn parse_optional_date(s: &str) -> anyhow::Result<Option<NaiveDate>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(s).map(Some)
    }
}
