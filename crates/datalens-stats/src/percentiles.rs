/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use datalens_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(25.0), Some(3.0));
/// assert_eq!(percentiles.get(50.0), Some(5.0));
/// assert_eq!(percentiles.get(75.0), Some(8.0));
/// ```
#[derive(Debug, Clone)]
pub struct Percentiles {
    /// Percentile-value pairs, in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// Returns an empty set when `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .filter_map(|&p| Some((p, nearest_rank(sorted_values, p)?)))
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values.
    ///
    /// This method will sort the values internally before computing percentiles.
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    ///
    /// ```
    /// use datalens_stats::percentiles::Percentiles;
    ///
    /// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    /// let percentiles = Percentiles::new(&values, &[50.0, 95.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(3.0));
    /// assert_eq!(percentiles.get(95.0), Some(5.0));
    /// assert_eq!(percentiles.get(25.0), None); // Not precomputed
    /// ```
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }
}

/// Computes a single percentile from sorted data using the nearest-rank method.
///
/// For `n` values, the p-th percentile is the element of rank `ceil(p / 100 * n)`
/// (1-based). The rank is clamped to `1..=n`, so `p = 0` yields the minimum and
/// `p = 100` the maximum. Callers are expected to pass `p` in `[0, 100]`.
///
/// Note that the 50th percentile of an even-length input is the lower of the
/// two central values, not their average.
///
/// # Returns
///
/// The value at the specified percentile, or `None` if the input is empty.
///
/// # Examples
///
/// ```
/// use datalens_stats::percentiles::nearest_rank;
///
/// let values = [25.0, 30.0, 35.0, 40.0, 45.0];
/// assert_eq!(nearest_rank(&values, 75.0), Some(40.0));
/// assert_eq!(nearest_rank(&values, 50.0), Some(35.0));
/// assert_eq!(nearest_rank(&values, 0.0), Some(25.0));
/// assert_eq!(nearest_rank(&[], 50.0), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn nearest_rank(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    let len = sorted_values.len();
    if len == 0 {
        return None;
    }
    let rank = ((percentile / 100.0) * len as f64).ceil() as usize;
    let rank = rank.clamp(1, len);
    Some(sorted_values[rank - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_rank_boundaries() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(nearest_rank(&values, 0.0), Some(1.0));
        assert_eq!(nearest_rank(&values, 25.0), Some(1.0));
        assert_eq!(nearest_rank(&values, 26.0), Some(2.0));
        assert_eq!(nearest_rank(&values, 50.0), Some(2.0));
        assert_eq!(nearest_rank(&values, 100.0), Some(4.0));
    }

    #[test]
    fn test_nearest_rank_single_value() {
        assert_eq!(nearest_rank(&[7.0], 0.0), Some(7.0));
        assert_eq!(nearest_rank(&[7.0], 99.0), Some(7.0));
    }

    #[test]
    fn test_percentiles_skip_empty_input() {
        let percentiles = Percentiles::new(&[], &[50.0]);
        assert_eq!(percentiles.iter().count(), 0);
        assert_eq!(percentiles.get(50.0), None);
    }

    #[test]
    fn test_percentiles_preserve_request_order() {
        let percentiles = Percentiles::new(&[5.0, 1.0, 3.0], &[90.0, 10.0]);
        let pairs = percentiles.iter().collect::<Vec<_>>();
        assert_eq!(pairs, vec![(90.0, 5.0), (10.0, 1.0)]);
    }
}
