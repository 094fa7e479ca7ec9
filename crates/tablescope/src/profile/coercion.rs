//! Numeric coercion and null classification for single cell values.

use crate::input::Value;

impl Value {
    /// Best-effort conversion to a finite number.
    ///
    /// Text is trimmed and `,` is read as a decimal separator (`"3,5"` is 3.5).
    /// The whole remaining string must parse; anything non-finite is `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Null => None,
            Value::Number(n) => n.is_finite().then_some(*n),
            Value::Text(s) => parse_number(s),
        }
    }

    /// True for explicit nulls and blank text. Numbers, including 0, never are.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.trim().is_empty(),
            Value::Number(_) => false,
        }
    }

    /// True when the value coerces to a number strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.to_number().is_some_and(|n| n > 0.0)
    }
}

/// Parse text under the coercion rules of [`Value::to_number`].
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    s.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}
