//! Error types for the Tablescope library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tablescope operations.
///
/// The profiling engine itself only ever returns [`TablescopeError::EmptyDataset`];
/// every other variant comes from decoding input or loading configuration.
#[derive(Debug, Error)]
pub enum TablescopeError {
    /// The dataset handed to the profiler has no rows.
    #[error("No valid rows to analyze")]
    EmptyDataset,

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to decode.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Tablescope operations.
pub type Result<T> = std::result::Result<T, TablescopeError>;
