//! Main Tablescope struct and public API.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::input::{decode_file, Dataset, DecoderConfig, SourceMetadata};
use crate::insight::Insights;
use crate::profile::{AnalysisResult, DatasetProfiler, ProfilerConfig};

/// Configuration for Tablescope analysis.
#[derive(Debug, Clone, Default)]
pub struct TablescopeConfig {
    /// Decoder configuration for files.
    pub decoder: DecoderConfig,
    /// Profiling thresholds.
    pub profiler: ProfilerConfig,
}

/// Result of analyzing a data file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The dataset profile.
    pub analysis: Arc<AnalysisResult>,
}

/// Entry point tying a decoder to the profiling engine.
pub struct Tablescope {
    config: TablescopeConfig,
    profiler: DatasetProfiler,
}

impl Tablescope {
    /// Create a new Tablescope instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(TablescopeConfig::default())
    }

    /// Create a Tablescope instance with custom configuration.
    pub fn with_config(config: TablescopeConfig) -> Self {
        let profiler = DatasetProfiler::with_config(&config.profiler);
        Self { config, profiler }
    }

    pub fn config(&self) -> &TablescopeConfig {
        &self.config
    }

    /// Profile rows that have already been decoded.
    pub fn analyze_rows(&self, rows: impl Into<Arc<Dataset>>) -> Result<AnalysisResult> {
        self.profiler.analyze(rows)
    }

    /// Decode a file and profile it.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<FileReport> {
        let (rows, source) = decode_file(path, &self.config.decoder)?;
        let analysis = self.profiler.analyze(rows)?;

        Ok(FileReport {
            source,
            analysis: Arc::new(analysis),
        })
    }

    /// Lazily computed aggregates over `analysis`, using this instance's thresholds.
    pub fn insights(&self, analysis: impl Into<Arc<AnalysisResult>>) -> Insights {
        Insights::new(analysis, self.config.profiler.clone())
    }
}

impl Default for Tablescope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::error::TablescopeError;

    fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_simple_csv() {
        let content = "sample_id,age,visit\nS001,25,2024-01-02\nS002,30,2024-01-03\nS003,28,2024-01-04\n";
        let file = create_test_file(content, ".csv");

        let report = Tablescope::new().analyze_file(file.path()).unwrap();

        assert_eq!(report.source.format, "csv");
        assert_eq!(report.source.row_count, 3);
        assert_eq!(report.source.column_count, 3);
        assert!(report.source.hash.starts_with("sha256:"));
        assert_eq!(report.analysis.numeric_columns(), ["age"]);
        assert_eq!(report.analysis.date_columns(), ["visit"]);
    }

    #[test]
    fn test_analyze_json_file() {
        let content = r#"[{"x": 1, "y": "a"}, {"x": 2, "y": null}]"#;
        let file = create_test_file(content, ".json");

        let report = Tablescope::new().analyze_file(file.path()).unwrap();

        assert_eq!(report.source.format, "json");
        assert_eq!(report.analysis.columns_with_nulls(), 1);
        assert!(report.analysis.ordered_by_first_column());
    }

    #[test]
    fn test_header_only_file_is_empty_dataset() {
        let file = create_test_file("a,b\n", ".csv");
        let err = Tablescope::new().analyze_file(file.path()).unwrap_err();
        assert!(matches!(err, TablescopeError::EmptyDataset));
    }

    #[test]
    fn test_missing_file() {
        let err = Tablescope::new()
            .analyze_file("/definitely/not/here.csv")
            .unwrap_err();
        assert!(matches!(err, TablescopeError::Io { .. }));
    }

    #[test]
    fn test_insights_use_config() {
        let config = TablescopeConfig {
            profiler: ProfilerConfig {
                histogram_bins: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        let scope = Tablescope::with_config(config);
        let rows: Dataset = (0..10)
            .map(|i| crate::input::row([("v", crate::input::Value::Number(i as f64))]))
            .collect();

        let insights = scope.insights(scope.analyze_rows(rows).unwrap());
        assert_eq!(insights.histogram("v").unwrap().len(), 3);
    }
}
