//! Dataset-level profiling: column discovery and the immutable analysis result.

use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::column::{column_values, ColumnProfile, DataType};
use super::date::{DateDetector, DEFAULT_MIN_MATCHES, DEFAULT_SAMPLE_SIZE};
use crate::error::{Result, TablescopeError};
use crate::input::{Dataset, Row, Value};
use crate::insight::CorrelationAlignment;

/// Tunable thresholds for profiling and derived aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Leading non-null values sampled per column for date detection.
    pub date_sample_size: usize,
    /// Parsed dates needed in the sample (capped at the sample length).
    pub date_min_matches: usize,
    /// Default bucket count for histograms.
    pub histogram_bins: usize,
    /// Maximum number of scatter pairs to collect.
    pub scatter_pair_limit: usize,
    /// How two columns are paired for correlation.
    pub correlation_alignment: CorrelationAlignment,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            date_sample_size: DEFAULT_SAMPLE_SIZE,
            date_min_matches: DEFAULT_MIN_MATCHES,
            histogram_bins: crate::insight::DEFAULT_BIN_COUNT,
            scatter_pair_limit: crate::insight::DEFAULT_SCATTER_PAIR_LIMIT,
            correlation_alignment: CorrelationAlignment::default(),
        }
    }
}

impl ProfilerConfig {
    /// Reject settings that would make derived aggregates meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(TablescopeError::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        if self.date_sample_size == 0 {
            return Err(TablescopeError::Config(
                "date_sample_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The complete, immutable output of profiling a dataset.
///
/// The rows are retained so that derived aggregates can be computed later
/// without going back to the decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    total_rows: usize,
    total_columns: usize,
    has_nulls: bool,
    ordered_by_first_column: bool,
    total_positive_values: usize,
    columns_with_nulls: usize,
    column_stats: Vec<ColumnProfile>,
    numeric_columns: Vec<String>,
    date_columns: Vec<String>,
    #[serde(skip)]
    rows: Arc<Dataset>,
}

impl AnalysisResult {
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn total_columns(&self) -> usize {
        self.total_columns
    }

    pub fn has_nulls(&self) -> bool {
        self.has_nulls
    }

    /// Whether the first discovered column is ascending or descending.
    pub fn ordered_by_first_column(&self) -> bool {
        self.ordered_by_first_column
    }

    pub fn total_positive_values(&self) -> usize {
        self.total_positive_values
    }

    /// Number of columns with at least one null cell.
    pub fn columns_with_nulls(&self) -> usize {
        self.columns_with_nulls
    }

    /// One profile per column, in discovery order.
    pub fn column_stats(&self) -> &[ColumnProfile] {
        &self.column_stats
    }

    /// Names of `Numeric` columns, in discovery order.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric_columns
    }

    /// Names of date columns, in discovery order.
    pub fn date_columns(&self) -> &[String] {
        &self.date_columns
    }

    /// The analyzed rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Shared handle to the analyzed rows.
    pub fn shared_rows(&self) -> Arc<Dataset> {
        Arc::clone(&self.rows)
    }

    /// Look up a column's profile by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.column_stats.iter().find(|c| c.name == name)
    }

    /// Column names in discovery order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.column_stats.iter().map(|c| c.name.as_str())
    }
}

/// Ordered union of the keys of every row, in first-appearance order.
pub fn discover_columns(rows: &[Row]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for row in rows {
        for key in row.keys() {
            seen.insert(key.as_str());
        }
    }
    seen.into_iter().map(str::to_string).collect()
}

/// Builds an [`AnalysisResult`] from a dataset.
#[derive(Debug, Clone, Default)]
pub struct DatasetProfiler {
    date_detector: DateDetector,
}

impl DatasetProfiler {
    /// Create a profiler with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profiler using the date thresholds of `config`.
    pub fn with_config(config: &ProfilerConfig) -> Self {
        Self {
            date_detector: DateDetector::with_thresholds(
                config.date_sample_size,
                config.date_min_matches,
            ),
        }
    }

    /// Profile every column of `rows`.
    ///
    /// Fails only when the dataset has no rows.
    pub fn analyze(&self, rows: impl Into<Arc<Dataset>>) -> Result<AnalysisResult> {
        let rows: Arc<Dataset> = rows.into();
        if rows.is_empty() {
            return Err(TablescopeError::EmptyDataset);
        }

        let columns = discover_columns(&rows);

        let mut column_stats = Vec::with_capacity(columns.len());
        let mut date_columns = Vec::new();

        for name in &columns {
            let values = column_values(&rows, name);
            let profile = ColumnProfile::from_values(name.as_str(), &values);

            let non_null: Vec<&Value> = values.into_iter().filter(|v| !v.is_null()).collect();
            let is_date = self.date_detector.is_date_column(&non_null);

            debug!(
                column = %name,
                data_type = ?profile.data_type,
                order = ?profile.order,
                nulls = profile.null_count,
                is_date,
                "profiled column"
            );

            if is_date {
                date_columns.push(name.clone());
            }
            column_stats.push(profile);
        }

        let numeric_columns: Vec<String> = column_stats
            .iter()
            .filter(|c| c.data_type == DataType::Numeric)
            .map(|c| c.name.clone())
            .collect();

        let columns_with_nulls = column_stats.iter().filter(|c| c.has_nulls()).count();
        let total_positive_values = column_stats.iter().map(|c| c.positive_count).sum();
        let ordered_by_first_column = column_stats
            .first()
            .is_some_and(|c| c.order.is_ordered());

        info!(
            rows = rows.len(),
            columns = columns.len(),
            numeric = numeric_columns.len(),
            dates = date_columns.len(),
            "analyzed dataset"
        );

        Ok(AnalysisResult {
            total_rows: rows.len(),
            total_columns: columns.len(),
            has_nulls: columns_with_nulls > 0,
            ordered_by_first_column,
            total_positive_values,
            columns_with_nulls,
            column_stats,
            numeric_columns,
            date_columns,
            rows,
        })
    }
}

/// Profile `rows` with default thresholds.
pub fn analyze(rows: impl Into<Arc<Dataset>>) -> Result<AnalysisResult> {
    DatasetProfiler::new().analyze(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::row;
    use crate::profile::Order;

    #[test]
    fn test_empty_dataset_fails() {
        let err = analyze(Dataset::new()).unwrap_err();
        assert!(matches!(err, TablescopeError::EmptyDataset));
    }

    #[test]
    fn test_column_discovery_order() {
        let rows = vec![
            row([("b", Value::Null), ("a", Value::Null)]),
            row([("c", Value::Null), ("a", Value::Null)]),
            row([("d", Value::Null), ("b", Value::Null)]),
        ];
        assert_eq!(discover_columns(&rows), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_numeric_and_text_scenario() {
        let rows = vec![
            row([("a", Value::text("1")), ("b", Value::text("x"))]),
            row([("a", Value::text("2")), ("b", Value::text("y"))]),
            row([("a", Value::text("3")), ("b", Value::text("z"))]),
        ];
        let result = analyze(rows).unwrap();

        assert_eq!(result.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(result.total_rows(), 3);
        assert_eq!(result.total_columns(), 2);

        let a = result.column("a").unwrap();
        assert_eq!(a.null_count, 0);
        assert_eq!(a.positive_count, 3);
        assert_eq!(a.data_type, DataType::Numeric);
        assert_eq!(a.order, Order::Ascending);

        let b = result.column("b").unwrap();
        assert_eq!(b.data_type, DataType::Text);
        assert_eq!(b.order, Order::Unordered);

        assert!(result.ordered_by_first_column());
        assert_eq!(result.numeric_columns(), ["a"]);
        assert_eq!(result.total_positive_values(), 3);
        assert!(!result.has_nulls());
    }

    #[test]
    fn test_all_null_scenario() {
        let rows = vec![row([("a", Value::Null)]), row([("a", Value::Null)])];
        let result = analyze(rows).unwrap();

        let a = result.column("a").unwrap();
        assert_eq!(a.null_count, 2);
        assert_eq!(a.data_type, DataType::Empty);
        assert_eq!(a.order, Order::Unordered);
        assert!(result.has_nulls());
        assert_eq!(result.columns_with_nulls(), 1);
        assert!(!result.ordered_by_first_column());
        assert!(result.date_columns().is_empty());
    }

    #[test]
    fn test_rows_without_keys() {
        let result = analyze(vec![Row::new(), Row::new()]).unwrap();

        assert_eq!(result.total_rows(), 2);
        assert_eq!(result.total_columns(), 0);
        assert!(!result.ordered_by_first_column());
        assert!(!result.has_nulls());
    }

    #[test]
    fn test_date_columns_detected() {
        let rows: Dataset = (1..=6)
            .map(|d| {
                row([
                    ("when", Value::text(format!("2024-02-0{}", d))),
                    ("v", Value::Number(d as f64)),
                ])
            })
            .collect();
        let result = analyze(rows).unwrap();

        assert_eq!(result.date_columns(), ["when"]);
        assert_eq!(result.numeric_columns(), ["v"]);
    }

    #[test]
    fn test_config_thresholds() {
        let rows: Dataset = ["2024-01-01", "2024-01-02", "later"]
            .into_iter()
            .map(|d| row([("when", Value::text(d))]))
            .collect();

        let strict = DatasetProfiler::new().analyze(rows.clone()).unwrap();
        assert!(strict.date_columns().is_empty());

        let lenient = DatasetProfiler::with_config(&ProfilerConfig {
            date_min_matches: 2,
            ..Default::default()
        })
        .analyze(rows)
        .unwrap();
        assert_eq!(lenient.date_columns(), ["when"]);
    }

    #[test]
    fn test_config_validation() {
        assert!(ProfilerConfig::default().validate().is_ok());
        let bad = ProfilerConfig {
            histogram_bins: 0,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(TablescopeError::Config(_))));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ProfilerConfig = serde_json::from_str(r#"{"histogram_bins": 12}"#).unwrap();
        assert_eq!(config.histogram_bins, 12);
        assert_eq!(config.date_sample_size, DEFAULT_SAMPLE_SIZE);
    }
}
