//! Date parsing under a fixed grammar and date-column detection.
//!
//! Accepted forms (after trimming):
//!
//! | form                          | example                      |
//! |-------------------------------|------------------------------|
//! | ISO date                      | `2024-03-15`                 |
//! | ISO date-time, `T` or space   | `2024-03-15T08:30[:00[.5]]`  |
//! | RFC 3339 with offset          | `2024-03-15T08:30:00+02:00`  |
//! | year-first slashes            | `2024/03/15`                 |
//! | day-first dots                | `15.03.2024`                 |
//!
//! Only text cells are considered. Numbers are never dates, and slash forms
//! with the day or month first are rejected because they are ambiguous.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::input::Value;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// Shape checks run before chrono so that chrono never sees partial matches.

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static ISO_DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2}(\.\d{1,9})?)?$").unwrap()
});

static RFC3339: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?(Z|[+-]\d{2}:\d{2})$").unwrap()
});

static YEAR_FIRST_SLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}/\d{1,2}/\d{1,2}$").unwrap());

static DAY_FIRST_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").unwrap());

/// Default number of leading non-null values inspected per column.
pub const DEFAULT_SAMPLE_SIZE: usize = 15;

/// Default number of successful parses that marks a date column.
pub const DEFAULT_MIN_MATCHES: usize = 5;

/// Parse a cell as a timestamp. Offsets are normalized to UTC.
pub fn parse_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Text(s) => parse_date_str(s.trim()),
        Value::Number(_) | Value::Null => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDateTime> {
    if ISO_DATE.is_match(s) {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN));
    }
    if ISO_DATETIME.is_match(s) {
        let normalized = s.replacen(' ', "T", 1);
        return NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M"))
            .ok();
    }
    if RFC3339.is_match(s) {
        return DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc());
    }
    if YEAR_FIRST_SLASH.is_match(s) {
        return NaiveDate::parse_from_str(s, "%Y/%m/%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN));
    }
    if DAY_FIRST_DOT.is_match(s) {
        return NaiveDate::parse_from_str(s, "%d.%m.%Y")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN));
    }
    None
}

/// Render a timestamp as a label: date only at midnight, date and time otherwise.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    if ts.time() == NaiveTime::MIN {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Decides whether a column holds dates by sampling its leading values.
#[derive(Debug, Clone, Copy)]
pub struct DateDetector {
    sample_size: usize,
    min_matches: usize,
}

impl DateDetector {
    /// Detector with the default sample size and match threshold.
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_SAMPLE_SIZE, DEFAULT_MIN_MATCHES)
    }

    pub fn with_thresholds(sample_size: usize, min_matches: usize) -> Self {
        Self {
            sample_size,
            min_matches,
        }
    }

    /// `values` are the column's non-null raw values in row order.
    ///
    /// The column is a date column when the number of parseable values in
    /// the sample reaches `min(min_matches, sample length)`. An empty sample
    /// is never a date column.
    pub fn is_date_column(&self, values: &[&Value]) -> bool {
        let sample = &values[..values.len().min(self.sample_size)];
        if sample.is_empty() {
            return false;
        }

        let parsed = sample.iter().filter(|v| parse_date(v).is_some()).count();
        let required = self.min_matches.min(sample.len());
        trace!(sampled = sample.len(), parsed, required, "date sample");

        parsed >= required
    }
}

impl Default for DateDetector {
    fn default() -> Self {
        Self::new()
    }
}
