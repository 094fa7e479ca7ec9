//! Cell values, rows and datasets as delivered by a decoder.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single cell's content.
///
/// Null is always explicit: decoders normalize blank cells to `Null` before a
/// dataset reaches the profiler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl Value {
    /// Build a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
        }
    }
}

/// One record: column name to value, in the order the decoder saw the keys.
///
/// Column names are case- and whitespace-sensitive. A row may omit a column
/// that other rows carry; the missing cell reads as [`Value::Null`].
pub type Row = IndexMap<String, Value>;

/// The full ordered collection of rows under analysis.
pub type Dataset = Vec<Row>;

static NULL: Value = Value::Null;

/// Look up a cell, treating a missing key as null.
pub fn cell<'a>(row: &'a Row, column: &str) -> &'a Value {
    row.get(column).unwrap_or(&NULL)
}

/// Build a row from `(name, value)` pairs.
///
/// ```
/// use tablescope::input::{row, Value};
///
/// let r = row([("a", Value::from(1.0)), ("b", Value::Null)]);
/// assert_eq!(r.len(), 2);
/// ```
pub fn row<K, I>(pairs: I) -> Row
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
