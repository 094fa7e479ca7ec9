//! Per-column statistics and type classification.

use serde::{Deserialize, Serialize};

use super::order::{detect_order, Order};
use crate::input::{cell, Row, Value};

/// Type of a column, decided from its non-null values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Every non-null value coerces to a number.
    Numeric,
    /// No non-null value coerces to a number.
    Text,
    /// Some, but not all, non-null values coerce to a number.
    Mixed,
    /// The column has no non-null values.
    Empty,
}

impl DataType {
    /// Classify from the count of non-null values and how many of them are numeric.
    pub fn classify(non_null: usize, numeric: usize) -> Self {
        if non_null == 0 {
            DataType::Empty
        } else if numeric == non_null {
            DataType::Numeric
        } else if numeric == 0 {
            DataType::Text
        } else {
            DataType::Mixed
        }
    }
}

/// Computed statistics and classification for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Rows in the dataset, including those where this column is null or absent.
    pub total_rows: usize,
    pub null_count: usize,
    /// Values that coerce to a number greater than zero.
    pub positive_count: usize,
    pub data_type: DataType,
    pub order: Order,
}

impl ColumnProfile {
    /// Number of non-null cells.
    pub fn non_null_count(&self) -> usize {
        self.total_rows - self.null_count
    }

    pub fn has_nulls(&self) -> bool {
        self.null_count > 0
    }

    /// Profile a column from its raw values, one per row.
    pub fn from_values(name: impl Into<String>, values: &[&Value]) -> Self {
        let null_count = values.iter().filter(|v| v.is_null()).count();
        let positive_count = values.iter().filter(|v| v.is_positive()).count();

        let non_null: Vec<&Value> = values.iter().copied().filter(|v| !v.is_null()).collect();
        let numeric = non_null.iter().filter(|v| v.to_number().is_some()).count();
        let data_type = DataType::classify(non_null.len(), numeric);

        // Non-numeric cells become NaN, which compares with nothing, so a
        // column is only ordered when all of its non-null cells are numeric.
        let keys: Vec<f64> = non_null
            .iter()
            .map(|v| v.to_number().unwrap_or(f64::NAN))
            .collect();
        let order = detect_order(&keys);

        Self {
            name: name.into(),
            total_rows: values.len(),
            null_count,
            positive_count,
            data_type,
            order,
        }
    }
}

/// Every row's value for `column`, with absent keys read as null.
pub fn column_values<'a>(rows: &'a [Row], column: &str) -> Vec<&'a Value> {
    rows.iter().map(|row| cell(row, column)).collect()
}

/// Profile one column of `rows`.
pub fn profile_column(rows: &[Row], column: &str) -> ColumnProfile {
    ColumnProfile::from_values(column, &column_values(rows, column))
}
