//! Date coercion for return fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only formats, in priority order.
///
/// `%m/%d/%Y` is tried before `%d/%m/%Y`, so an ambiguous early-month date
/// such as `03/04/2023` reads as March 4th.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%Y%m%d"];

const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const OFFSET_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a calendar date, trying each accepted format in order.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Parse a calendar date, also accepting `YYYY-MM-DDThh:mm:ss[±hh:mm]` timestamps.
///
/// A timestamp with an offset yields the date in its own offset.
pub fn parse_date_or_timestamp(text: &str) -> Option<NaiveDate> {
    if let Some(date) = parse_date(text) {
        return Some(date);
    }

    let text = text.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, NAIVE_TIMESTAMP_FORMAT) {
        return Some(naive.date());
    }

    DateTime::parse_from_str(text, OFFSET_TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.date_naive())
}
