//! Pairwise Pearson correlation between numeric columns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::{cell, Row};

/// How the values of two columns are paired before correlating them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationAlignment {
    /// Pair values from the same row, skipping rows where either side is not numeric.
    #[default]
    RowAligned,
    /// Filter each column independently, then pair by position after truncating
    /// to the shorter list. When the columns have gaps in different rows this
    /// pairs values from different rows; kept for compatibility with older output.
    Positional,
}

/// Pearson correlation coefficient of two equally long series.
///
/// Returns 0 when either series is empty, the lengths differ, or either
/// series is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() || ys.is_empty() || xs.len() != ys.len() {
        return 0.0;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    // Separate roots keep the product in range for very large or small magnitudes.
    let denominator = var_x.sqrt() * var_y.sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    (cov / denominator).clamp(-1.0, 1.0)
}

/// Square matrix of correlations, indexed in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// `values[i][j]` correlates `columns[i]` with `columns[j]`.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation between two columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The two series for one column pair under `alignment`.
pub fn paired_values(
    rows: &[Row],
    x: &str,
    y: &str,
    alignment: CorrelationAlignment,
) -> (Vec<f64>, Vec<f64>) {
    match alignment {
        CorrelationAlignment::RowAligned => rows
            .iter()
            .filter_map(|row| Some((cell(row, x).to_number()?, cell(row, y).to_number()?)))
            .unzip(),
        CorrelationAlignment::Positional => {
            let mut xs = numeric_values(rows, x);
            let mut ys = numeric_values(rows, y);
            let len = xs.len().min(ys.len());
            xs.truncate(len);
            ys.truncate(len);
            (xs, ys)
        }
    }
}

/// Every value of `column` that coerces to a number, in row order.
pub fn numeric_values(rows: &[Row], column: &str) -> Vec<f64> {
    rows.iter()
        .filter_map(|row| cell(row, column).to_number())
        .collect()
}

/// Correlate every ordered pair of `columns`, self-pairs included.
pub fn correlation_matrix(
    columns: &[String],
    rows: &[Row],
    alignment: CorrelationAlignment,
) -> CorrelationMatrix {
    let values = columns
        .iter()
        .map(|x| {
            columns
                .iter()
                .map(|y| {
                    let (xs, ys) = paired_values(rows, x, y, alignment);
                    pearson(&xs, &ys)
                })
                .collect()
        })
        .collect();

    debug!(columns = columns.len(), ?alignment, "computed correlation matrix");

    CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    }
}
