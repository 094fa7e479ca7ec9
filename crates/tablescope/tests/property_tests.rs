//! Property-based tests for the profiling engine.
//!
//! These tests use proptest to generate random datasets and verify that the
//! profiler and derived aggregates maintain their invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p tablescope --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p tablescope --test property_tests
//! ```

use proptest::prelude::*;

use tablescope::input::{Dataset, Row, Value};
use tablescope::insight::{build_histogram, pearson};
use tablescope::profile::{analyze, detect_order, DataType, Order};

// =============================================================================
// Test Strategies
// =============================================================================

/// Cells covering every category: numbers, numeric text, words, blanks and nulls.
fn cell_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1000.0f64..1000.0).prop_map(Value::Number),
        Just(Value::Number(0.0)),
        "-?[0-9]{1,4}(,[0-9]{1,2})?".prop_map(Value::Text),
        "[a-z]{1,8}".prop_map(Value::Text),
        " {0,3}".prop_map(Value::Text),
        Just(Value::Null),
    ]
}

/// Rows drawn from a small column vocabulary; any row may omit any column.
fn dataset() -> impl Strategy<Value = Dataset> {
    let row = prop::collection::vec(
        (prop::sample::select(vec!["a", "b", "c", "d", "e"]), cell_value()),
        0..5,
    )
    .prop_map(|cells| {
        cells
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<Row>()
    });
    prop::collection::vec(row, 1..30)
}

// =============================================================================
// Profiling Properties
// =============================================================================

proptest! {
    /// Non-empty datasets never fail and every profile accounts for every row.
    #[test]
    fn prop_null_accounting(rows in dataset()) {
        let result = analyze(rows.clone()).unwrap();
        prop_assert_eq!(result.total_rows(), rows.len());

        for profile in result.column_stats() {
            let non_null = rows
                .iter()
                .filter(|r| r.get(&profile.name).is_some_and(|v| !v.is_null()))
                .count();
            prop_assert_eq!(profile.total_rows, rows.len());
            prop_assert!(profile.null_count <= profile.total_rows);
            prop_assert_eq!(profile.null_count + non_null, profile.total_rows);
        }
    }

    /// Data types follow the numeric-coercion rule over non-null cells.
    #[test]
    fn prop_data_type_rule(rows in dataset()) {
        let result = analyze(rows.clone()).unwrap();

        for profile in result.column_stats() {
            let non_null: Vec<&Value> = rows
                .iter()
                .filter_map(|r| r.get(&profile.name))
                .filter(|v| !v.is_null())
                .collect();
            let numeric = non_null.iter().filter(|v| v.to_number().is_some()).count();

            let expected = if non_null.is_empty() {
                DataType::Empty
            } else if numeric == non_null.len() {
                DataType::Numeric
            } else if numeric == 0 {
                DataType::Text
            } else {
                DataType::Mixed
            };
            prop_assert_eq!(profile.data_type, expected);
        }
    }

    /// Numeric columns are exactly the profiles typed Numeric, in order.
    #[test]
    fn prop_numeric_columns(rows in dataset()) {
        let result = analyze(rows).unwrap();
        let expected: Vec<String> = result
            .column_stats()
            .iter()
            .filter(|c| c.data_type == DataType::Numeric)
            .map(|c| c.name.clone())
            .collect();
        prop_assert_eq!(result.numeric_columns(), expected.as_slice());
    }

    /// Positive counts are bounded by non-null counts and sum to the total.
    #[test]
    fn prop_positive_counts(rows in dataset()) {
        let result = analyze(rows).unwrap();
        let mut total = 0;
        for profile in result.column_stats() {
            prop_assert!(profile.positive_count <= profile.non_null_count());
            total += profile.positive_count;
        }
        prop_assert_eq!(result.total_positive_values(), total);
        prop_assert_eq!(result.has_nulls(), result.columns_with_nulls() > 0);
    }

    /// Sorting any sequence makes it ascending; reversing makes it descending
    /// unless it is constant.
    #[test]
    fn prop_sorted_sequences(mut values in prop::collection::vec(-100i32..100, 2..40)) {
        values.sort();
        prop_assert_eq!(detect_order(&values), Order::Ascending);

        let constant = values.first() == values.last();
        values.reverse();
        let expected = if constant { Order::Ascending } else { Order::Descending };
        prop_assert_eq!(detect_order(&values), expected);
    }
}

// =============================================================================
// Aggregate Properties
// =============================================================================

proptest! {
    /// Histogram counts always sum to the input length.
    #[test]
    fn prop_histogram_conserves_counts(
        values in prop::collection::vec(-1e6f64..1e6, 0..200),
        bins in 1usize..20,
    ) {
        let buckets = build_histogram(&values, bins);
        prop_assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), values.len());
        prop_assert!(buckets.len() <= bins);
    }

    /// Pearson stays within [-1, 1] and is symmetric.
    #[test]
    fn prop_pearson_bounded(
        pairs in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..100),
    ) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let r = pearson(&xs, &ys);
        prop_assert!((-1.0..=1.0).contains(&r));
        prop_assert_eq!(r, pearson(&ys, &xs));
    }
}
