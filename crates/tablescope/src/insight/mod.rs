//! Derived aggregates computed on demand from an [`AnalysisResult`].

mod correlation;
mod histogram;
mod series;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;

pub use correlation::{
    correlation_matrix, numeric_values, paired_values, pearson, CorrelationAlignment,
    CorrelationMatrix,
};
pub use histogram::{build_histogram, Bucket, DEFAULT_BIN_COUNT};
pub use series::{
    default_time_series, first_time_series_columns, scatter_pairs, time_series, ScatterPair,
    TimePoint, TimeSeries, DEFAULT_SCATTER_PAIR_LIMIT,
};

use crate::profile::{AnalysisResult, ProfilerConfig};

/// Lazily computed, cached aggregates over one analysis.
///
/// Each aggregate is computed the first time it is asked for. Histograms are
/// cached per `(column, bins)`. The underlying result is never modified.
#[derive(Debug)]
pub struct Insights {
    result: Arc<AnalysisResult>,
    config: ProfilerConfig,
    histograms: Mutex<HashMap<(String, usize), Arc<Vec<Bucket>>>>,
    correlation: OnceCell<CorrelationMatrix>,
    time_series: OnceCell<Option<TimeSeries>>,
    scatter: OnceCell<Vec<ScatterPair>>,
}

impl Insights {
    pub fn new(result: impl Into<Arc<AnalysisResult>>, config: ProfilerConfig) -> Self {
        Self {
            result: result.into(),
            config,
            histograms: Mutex::new(HashMap::new()),
            correlation: OnceCell::new(),
            time_series: OnceCell::new(),
            scatter: OnceCell::new(),
        }
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    /// Histogram of a column's numeric values with the configured bucket count.
    pub fn histogram(&self, column: &str) -> Option<Arc<Vec<Bucket>>> {
        self.histogram_with_bins(column, self.config.histogram_bins)
    }

    /// Histogram of a column's numeric values; `None` for an unknown column.
    pub fn histogram_with_bins(&self, column: &str, bins: usize) -> Option<Arc<Vec<Bucket>>> {
        self.result.column(column)?;

        let key = (column.to_string(), bins);
        let mut cache = self
            .histograms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let buckets = cache.entry(key).or_insert_with(|| {
            let values = numeric_values(self.result.rows(), column);
            Arc::new(build_histogram(&values, bins))
        });
        Some(Arc::clone(buckets))
    }

    /// Correlation matrix over the numeric columns.
    pub fn correlation_matrix(&self) -> &CorrelationMatrix {
        self.correlation.get_or_init(|| {
            correlation_matrix(
                self.result.numeric_columns(),
                self.result.rows(),
                self.config.correlation_alignment,
            )
        })
    }

    /// First date column against first numeric column, if both exist.
    pub fn time_series(&self) -> Option<&TimeSeries> {
        self.time_series
            .get_or_init(|| default_time_series(&self.result))
            .as_ref()
    }

    /// Up to the configured number of non-empty numeric column pairs.
    pub fn scatter_pairs(&self) -> &[ScatterPair] {
        self.scatter.get_or_init(|| {
            scatter_pairs(
                self.result.numeric_columns(),
                self.result.rows(),
                self.config.scatter_pair_limit,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{row, Row, Value};
    use crate::profile::analyze;

    fn sample() -> Insights {
        let rows: Vec<Row> = (1..=6)
            .map(|d| {
                row([
                    ("day", Value::text(format!("2024-07-0{}", d))),
                    ("x", Value::Number(d as f64)),
                    ("y", Value::Number(2.0 * d as f64)),
                ])
            })
            .collect();
        Insights::new(analyze(rows).unwrap(), ProfilerConfig::default())
    }

    #[test]
    fn test_histogram_cached_per_bins() {
        let insights = sample();

        let first = insights.histogram("x").unwrap();
        let again = insights.histogram("x").unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(first.len(), DEFAULT_BIN_COUNT);

        let coarse = insights.histogram_with_bins("x", 2).unwrap();
        assert_eq!(coarse.len(), 2);
        assert!(!Arc::ptr_eq(&first, &coarse));
    }

    #[test]
    fn test_histogram_unknown_column() {
        assert!(sample().histogram("nope").is_none());
    }

    #[test]
    fn test_text_column_histogram_is_empty() {
        let insights = sample();
        assert!(insights.histogram("day").unwrap().is_empty());
    }

    #[test]
    fn test_derived_aggregates() {
        let insights = sample();

        let matrix = insights.correlation_matrix();
        assert_eq!(matrix.columns, vec!["x", "y"]);
        assert!((matrix.get("x", "y").unwrap() - 1.0).abs() < 1e-12);

        let series = insights.time_series().unwrap();
        assert_eq!(series.date_column, "day");
        assert_eq!(series.value_column, "x");

        let pairs = insights.scatter_pairs();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].points.len(), 6);
    }

    #[test]
    fn test_insights_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Insights>();
        assert_send_sync::<AnalysisResult>();
    }
}
