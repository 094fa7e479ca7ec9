//! Monotonic-order detection over a sequence of comparable values.

use serde::{Deserialize, Serialize};

/// Monotonic order of a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Every element is >= its predecessor.
    Ascending,
    /// Every element is <= its predecessor.
    Descending,
    /// Neither, or fewer than two elements.
    #[default]
    Unordered,
}

impl Order {
    /// Returns true for `Ascending` or `Descending`.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, Order::Unordered)
    }
}

/// Classify the monotonic order of `values`.
///
/// Elements compare with their own `PartialOrd`; an incomparable pair (such
/// as a NaN) satisfies neither predicate. A constant sequence satisfies both
/// predicates and is reported as `Ascending`, since that check runs first.
pub fn detect_order<T: PartialOrd>(values: &[T]) -> Order {
    if values.len() < 2 {
        return Order::Unordered;
    }

    if values.windows(2).all(|w| w[1] >= w[0]) {
        Order::Ascending
    } else if values.windows(2).all(|w| w[1] <= w[0]) {
        Order::Descending
    } else {
        Order::Unordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unordered() {
        assert_eq!(Order::default(), Order::Unordered);
    }

    #[test]
    fn test_short_sequences_unordered() {
        let empty: [f64; 0] = [];
        assert_eq!(detect_order(&empty), Order::Unordered);
        assert_eq!(detect_order(&[1.0]), Order::Unordered);
    }

    #[test]
    fn test_numeric_orders() {
        assert_eq!(detect_order(&[1.0, 2.0, 2.0, 3.0]), Order::Ascending);
        assert_eq!(detect_order(&[3.0, 2.0, 2.0, 1.0]), Order::Descending);
        assert_eq!(detect_order(&[1.0, 3.0, 2.0]), Order::Unordered);
    }

    #[test]
    fn test_constant_is_ascending() {
        assert_eq!(detect_order(&[5.0, 5.0, 5.0]), Order::Ascending);
    }

    #[test]
    fn test_text_is_lexicographic() {
        assert_eq!(detect_order(&["a", "b", "c"]), Order::Ascending);
        // "10" sorts before "9" as text
        assert_eq!(detect_order(&["9", "10"]), Order::Descending);
    }

    #[test]
    fn test_nan_breaks_order() {
        assert_eq!(detect_order(&[1.0, f64::NAN, 2.0]), Order::Unordered);
    }
}
