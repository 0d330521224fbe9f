//! Query date parsing
//!
//! Accepts the formats users type into the lookup form: ISO dates and
//! timestamps, US month-first dates, written month names, compact
//! `YYYYMMDD` and a few relative words. Anything else goes to `fuzzydate`.

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Date-only formats tried in order
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// Timestamp formats; the time of day is discarded
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a query date relative to the local calendar day
///
/// Supports:
/// - "today", "yesterday", "tomorrow"
/// - "2024-01-15", "2024-01-15T00:00:00", "2024-01-15T00:00:00Z"
/// - "01/15/2024", "2024/01/15", "20240115"
/// - "January 15, 2024", "15 Jan 2024"
#[must_use]
pub fn parse_query_date(input: &str) -> Option<NaiveDate> {
    parse_query_date_from(input, Local::now().date_naive())
}

/// Parse a query date, resolving relative words against `today`
#[must_use]
pub fn parse_query_date_from(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(date) = parse_relative(&input.to_lowercase(), today) {
        debug!(input = %input, date = %date, "Parsed relative date");
        return Some(date);
    }

    if let Some(date) = parse_date_format(input) {
        debug!(input = %input, date = %date, "Parsed date format");
        return Some(date);
    }

    // Fall back to fuzzydate library
    match fuzzydate::parse(input) {
        Ok(datetime) => {
            let date = datetime.date();
            debug!(input = %input, date = %date, "Parsed with fuzzydate");
            Some(date)
        },
        Err(_) => {
            debug!(input = %input, "Failed to parse date");
            None
        },
    }
}

fn parse_relative(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input {
        "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        _ => None,
    }
}

fn parse_date_format(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| parse_compact(input))
}

/// `YYYYMMDD` with no separators
fn parse_compact(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = input[..4].parse().ok()?;
    let month = input[4..6].parse().ok()?;
    let day = input[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
