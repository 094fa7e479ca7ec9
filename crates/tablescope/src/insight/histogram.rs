//! Fixed-count histogram binning.

use serde::{Deserialize, Serialize};

/// Bucket count used when none is requested.
pub const DEFAULT_BIN_COUNT: usize = 8;

/// One histogram bucket covering `[start, end)`; the last bucket also holds the maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// `start-end` with two decimals, or the single value for a constant input.
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bin `values` into `bin_count` equal-width buckets between their min and max.
///
/// Empty input yields no buckets. When every value is equal there is a
/// single bucket labeled with that value. Non-finite values are skipped and a
/// `bin_count` of zero is treated as one.
///
/// ```
/// use tablescope::insight::build_histogram;
///
/// let buckets = build_histogram(&[0.0, 2.5, 5.0, 7.5, 10.0], 2);
/// assert_eq!(buckets[0].label, "0.00-5.00");
/// assert_eq!(buckets[1].label, "5.00-10.00");
/// assert_eq!(buckets[0].count + buckets[1].count, 5);
/// ```
pub fn build_histogram(values: &[f64], bin_count: usize) -> Vec<Bucket> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![Bucket {
            label: format!("{}", min),
            start: min,
            end: max,
            count: finite.len(),
        }];
    }

    let bin_count = bin_count.max(1);
    // Halved so the span stays finite even when max - min would overflow.
    let half_span = max / 2.0 - min / 2.0;
    let edge = |i: usize| {
        let t = i as f64 / bin_count as f64;
        min * (1.0 - t) + max * t
    };

    let mut counts = vec![0usize; bin_count];
    for v in &finite {
        // The maximum lands exactly on the upper edge; clamp it into the last bucket.
        let position = (v / 2.0 - min / 2.0) / half_span * bin_count as f64;
        let index = (position.floor() as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = edge(i);
            let end = edge(i + 1);
            Bucket {
                label: format!("{:.2}-{:.2}", start, end),
                start,
                end,
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(build_histogram(&[], DEFAULT_BIN_COUNT).is_empty());
    }

    #[test]
    fn test_constant_input_single_bucket() {
        let buckets = build_histogram(&[1.0, 1.0, 1.0], 8);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 3);
        assert_eq!(buckets[0].label, "1");
    }

    #[test]
    fn test_two_bins_over_range() {
        let values: Vec<f64> = (0..=10).map(|v| v as f64).collect();
        let buckets = build_histogram(&values, 2);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "0.00-5.00");
        assert_eq!(buckets[1].label, "5.00-10.00");
        assert_eq!(buckets[0].count, 5);
        assert_eq!(buckets[1].count, 6);
    }

    #[test]
    fn test_max_lands_in_last_bucket() {
        let buckets = build_histogram(&[0.0, 10.0], 8);
        assert_eq!(buckets.len(), 8);
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[7].count, 1);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_negative_range_labels() {
        let buckets = build_histogram(&[-1.0, 0.0, 1.0], 2);
        assert_eq!(buckets[0].label, "-1.00-0.00");
        assert_eq!(buckets[1].label, "0.00-1.00");
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].count, 2);
    }

    #[test]
    fn test_zero_bins_treated_as_one() {
        let buckets = build_histogram(&[1.0, 2.0, 3.0], 0);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 3);
    }

    #[test]
    fn test_extreme_range_stays_finite() {
        let buckets = build_histogram(&[-1e308, 0.0, 1e308], 2);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].start, -1e308);
        assert_eq!(buckets[0].end, 0.0);
        assert_eq!(buckets[1].end, 1e308);
        assert!(buckets.iter().all(|b| b.start.is_finite() && b.end.is_finite()));
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].count, 2);
    }

    #[test]
    fn test_non_finite_skipped() {
        let buckets = build_histogram(&[f64::NAN, 2.0, 2.0], 4);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 2);
    }
}
