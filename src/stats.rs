//! Order-statistic helpers.
//!
//! Every percentile computation in the crate (box-plot quartiles, histogram
//! boundaries, density-tier thresholds) goes through [`percentile`] so that
//! quantile semantics stay consistent across plot types.

/// Calculate a percentile over pre-sorted data using linear interpolation
/// between order statistics.
///
/// `p` is given in percent, e.g. `50.0` for the median. Returns `0.0` for an
/// empty slice.
#[must_use]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let k = (p / 100.0) * (sorted.len() - 1) as f64;
    let f = k.floor() as usize;
    let c = k.ceil() as usize;

    if f == c || c >= sorted.len() {
        sorted[f.min(sorted.len() - 1)]
    } else {
        let d = k - f as f64;
        sorted[f] * (1.0 - d) + sorted[c] * d
    }
}

/// Return a sorted copy of `values`. NaN values order last.
#[must_use]
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Five-number summary of a data series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    /// Minimum value.
    pub min: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Maximum value.
    pub max: f64,
}

impl FiveNumberSummary {
    /// Compute the summary from unsorted values.
    ///
    /// Returns `None` for an empty slice. The quartiles satisfy
    /// `min <= q1 <= median <= q3 <= max` by construction.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted_copy(values);
        Some(Self {
            min: sorted[0],
            q1: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            q3: percentile(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percentile_endpoints() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(percentile(&sorted, 0.0), 1.0);
        assert_relative_eq!(percentile(&sorted, 100.0), 5.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // k = 0.5 * 3 = 1.5 -> halfway between 2.0 and 3.0
        assert_relative_eq!(percentile(&sorted, 50.0), 2.5);
    }

    #[test]
    fn test_percentile_single_element() {
        assert_relative_eq!(percentile(&[7.0], 25.0), 7.0);
        assert_relative_eq!(percentile(&[7.0], 75.0), 7.0);
    }

    #[test]
    fn test_percentile_empty() {
        assert_relative_eq!(percentile(&[], 50.0), 0.0);
    }

    #[test]
    fn test_five_number_summary_ordering() {
        let summary =
            FiveNumberSummary::from_values(&[1.0, 2.0, 5.0, 20.0, 3.0, 22.0, 4.0, 4.0, 2.0, 5.0])
                .unwrap();
        assert!(summary.min <= summary.q1);
        assert!(summary.q1 <= summary.median);
        assert!(summary.median <= summary.q3);
        assert!(summary.q3 <= summary.max);
        assert_relative_eq!(summary.min, 1.0);
        assert_relative_eq!(summary.max, 22.0);
    }

    #[test]
    fn test_five_number_summary_quartiles() {
        // sorted: [1, 2, 2, 3, 4, 4, 5, 5, 20, 22]
        let summary =
            FiveNumberSummary::from_values(&[1.0, 2.0, 5.0, 20.0, 3.0, 22.0, 4.0, 4.0, 2.0, 5.0])
                .unwrap();
        assert_relative_eq!(summary.q1, 2.25);
        assert_relative_eq!(summary.median, 4.0);
        assert_relative_eq!(summary.q3, 5.0);
    }

    #[test]
    fn test_five_number_summary_constant_series() {
        let summary = FiveNumberSummary::from_values(&[3.0, 3.0, 3.0]).unwrap();
        assert_relative_eq!(summary.q1, 3.0);
        assert_relative_eq!(summary.median, 3.0);
        assert_relative_eq!(summary.q3, 3.0);
    }

    #[test]
    fn test_five_number_summary_empty() {
        assert!(FiveNumberSummary::from_values(&[]).is_none());
    }
}
