//! Standard-deviation based outlier detection.
//!
//! A value is an outlier when it lies strictly outside
//! `mean ± threshold * std_dev` (population standard deviation).

use crate::descriptive;

/// Acceptance interval derived from the mean and standard deviation of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmaBounds {
    /// Values strictly below this bound are outliers.
    pub lower: f64,
    /// Values strictly above this bound are outliers.
    pub upper: f64,
}

impl SigmaBounds {
    /// Computes the bounds `mean ± threshold * std_dev`.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// ```
    /// # use datalens_stats::outliers::SigmaBounds;
    /// let bounds = SigmaBounds::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 1.5).unwrap();
    /// assert_eq!(bounds.lower, 2.0);
    /// assert_eq!(bounds.upper, 8.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64], threshold: f64) -> Option<Self> {
        let mean = descriptive::mean(values)?;
        let std_dev = descriptive::std_dev(values)?;
        Some(Self {
            lower: mean - threshold * std_dev,
            upper: mean + threshold * std_dev,
        })
    }

    /// Whether `value` lies strictly outside the bounds.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Returns the outliers of `values` in their original order, duplicates retained.
///
/// ```
/// # use datalens_stats::outliers::detect;
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(detect(&values, 1.5), [9.0]);
/// assert!(detect(&values, 3.0).is_empty());
/// ```
#[must_use]
pub fn detect(values: &[f64], threshold: f64) -> Vec<f64> {
    let Some(bounds) = SigmaBounds::new(values, threshold) else {
        return vec![];
    };
    values
        .iter()
        .copied()
        .filter(|&v| bounds.is_outlier(v))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_distr::{Distribution as _, Normal};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(SigmaBounds::new(&[], 3.0).is_none());
        assert!(detect(&[], 3.0).is_empty());
    }

    #[test]
    fn test_constant_values_have_no_outliers() {
        assert!(detect(&[5.0; 10], 0.0).is_empty());
    }

    #[test]
    fn test_bounds_are_strict() {
        // mean 5, std dev 2: with threshold 1.5 the bounds are exactly 2 and 8
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bounds = SigmaBounds::new(&values, 1.5).unwrap();
        assert!(!bounds.is_outlier(2.0));
        assert!(!bounds.is_outlier(8.0));
        assert!(bounds.is_outlier(8.5));
    }

    #[test]
    fn test_injected_outlier_is_reported_in_order() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let normal = Normal::<f64>::new(100.0, 1.0).unwrap();
        let mut values = (0..200)
            .map(|_| normal.sample(&mut rng).clamp(97.5, 102.5))
            .collect::<Vec<_>>();
        assert!(detect(&values, 3.0).is_empty());

        values.insert(50, 1000.0);
        values.insert(120, -1000.0);
        assert_eq!(detect(&values, 3.0), [1000.0, -1000.0]);
    }
}
