//! Time-series and scatter-pair projections for charting.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::{cell, Row};
use crate::profile::{format_timestamp, parse_date, AnalysisResult};

/// Maximum number of scatter pairs collected by default.
pub const DEFAULT_SCATTER_PAIR_LIMIT: usize = 4;

/// One point of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub label: String,
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// A numeric column plotted against a date column, sorted by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub date_column: String,
    pub value_column: String,
    pub points: Vec<TimePoint>,
}

/// Points for one pair of numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPair {
    pub x: String,
    pub y: String,
    pub points: Vec<(f64, f64)>,
}

/// Column selection policy for the default time series: the first date
/// column and the first numeric column, both in discovery order.
pub fn first_time_series_columns(result: &AnalysisResult) -> Option<(&str, &str)> {
    let date = result.date_columns().first()?;
    let value = result.numeric_columns().first()?;
    Some((date.as_str(), value.as_str()))
}

/// Plot `value_column` against `date_column`.
///
/// Rows where the date does not parse or the value is not numeric are
/// dropped. Points are sorted by timestamp; equal timestamps keep row order.
pub fn time_series(rows: &[Row], date_column: &str, value_column: &str) -> TimeSeries {
    let mut points: Vec<TimePoint> = rows
        .iter()
        .filter_map(|row| {
            let timestamp = parse_date(cell(row, date_column))?;
            let value = cell(row, value_column).to_number()?;
            Some(TimePoint {
                label: format_timestamp(&timestamp),
                timestamp,
                value,
            })
        })
        .collect();

    points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    debug!(
        date_column,
        value_column,
        points = points.len(),
        "built time series"
    );

    TimeSeries {
        date_column: date_column.to_string(),
        value_column: value_column.to_string(),
        points,
    }
}

/// The default time series of an analysis, if it has a date and a numeric column.
pub fn default_time_series(result: &AnalysisResult) -> Option<TimeSeries> {
    let (date, value) = first_time_series_columns(result)?;
    Some(time_series(result.rows(), date, value))
}

/// Collect up to `limit` non-empty scatter pairs.
///
/// Pairs `(i, j)` with `i < j` are visited in column order and the scan stops
/// as soon as `limit` pairs with at least one point are found. This is a
/// first-found selection, not a ranking.
pub fn scatter_pairs(columns: &[String], rows: &[Row], limit: usize) -> Vec<ScatterPair> {
    let mut pairs = Vec::new();
    if limit == 0 {
        return pairs;
    }

    'outer: for (i, x) in columns.iter().enumerate() {
        for y in &columns[i + 1..] {
            let points: Vec<(f64, f64)> = rows
                .iter()
                .filter_map(|row| Some((cell(row, x).to_number()?, cell(row, y).to_number()?)))
                .collect();

            if points.is_empty() {
                continue;
            }

            pairs.push(ScatterPair {
                x: x.clone(),
                y: y.clone(),
                points,
            });

            if pairs.len() >= limit {
                break 'outer;
            }
        }
    }

    debug!(pairs = pairs.len(), limit, "selected scatter pairs");
    pairs
}
