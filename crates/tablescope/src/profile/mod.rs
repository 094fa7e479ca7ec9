//! The profiling engine: coercion, ordering, date detection and column statistics.

mod coercion;
mod column;
mod dataset;
mod date;
mod order;

pub use column::{column_values, profile_column, ColumnProfile, DataType};
pub use dataset::{analyze, discover_columns, AnalysisResult, DatasetProfiler, ProfilerConfig};
pub use date::{
    format_timestamp, parse_date, DateDetector, DEFAULT_MIN_MATCHES, DEFAULT_SAMPLE_SIZE,
};
pub use order::{detect_order, Order};
