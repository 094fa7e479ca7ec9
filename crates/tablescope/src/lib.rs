//! Tablescope: automatic statistical profiling for tabular datasets.
//!
//! Tablescope takes rows of named columns with heterogeneous cell values and
//! produces a profile that drives visualizations: per-column type inference,
//! null and positive counts, monotonic-order detection and date-column
//! detection, plus on-demand histograms, correlations, a time series and
//! scatter pairs.
//!
//! # Core Principles
//!
//! - **Explicit nulls**: cells are a tagged [`Value`]; nothing is inferred from representation
//! - **Total operations**: degenerate inputs yield documented sentinels, not errors
//! - **Immutable results**: an [`AnalysisResult`] never changes once built
//!
//! # Example
//!
//! ```
//! use tablescope::input::{row, Value};
//! use tablescope::profile::{analyze, DataType};
//!
//! let rows = vec![
//!     row([("a", Value::text("1")), ("b", Value::text("x"))]),
//!     row([("a", Value::text("2")), ("b", Value::text("y"))]),
//! ];
//! let result = analyze(rows).unwrap();
//!
//! assert_eq!(result.numeric_columns(), ["a"]);
//! assert_eq!(result.column("b").unwrap().data_type, DataType::Text);
//! ```

pub mod error;
pub mod input;
pub mod insight;
pub mod profile;

mod tablescope;

pub use crate::tablescope::{FileReport, Tablescope, TablescopeConfig};
pub use error::{Result, TablescopeError};
pub use input::{Dataset, Row, SourceMetadata, Value};
pub use insight::{CorrelationAlignment, Insights};
pub use profile::{AnalysisResult, ColumnProfile, DataType, Order, ProfilerConfig};
