//! Association statistics between two paired columns.
//!
//! [`PairedMoments`] collects the centered second moments of two equally long
//! series once, so that covariance, correlation and both variances can be read
//! from the same pass over the data.
//!
//! # Examples
//!
//! ```
//! use datalens_stats::association::PairedMoments;
//!
//! let age = [25.0, 30.0, 35.0, 40.0, 45.0];
//! let salary = [50000.0, 60000.0, 70000.0, 80000.0, 90000.0];
//! let moments = PairedMoments::new(&age, &salary).unwrap();
//!
//! assert_eq!(moments.covariance(), 100_000.0);
//! assert!((moments.correlation() - 1.0).abs() < 1e-12);
//! ```

use crate::descriptive;

/// Centered second moments of two paired series.
///
/// All derived statistics are population statistics (divisor `N`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedMoments {
    /// Number of pairs.
    pub count: usize,
    /// Mean of the first series.
    pub mean_x: f64,
    /// Mean of the second series.
    pub mean_y: f64,
    /// Sum of squared deviations of the first series.
    pub sum_sq_x: f64,
    /// Sum of squared deviations of the second series.
    pub sum_sq_y: f64,
    /// Sum of products of paired deviations.
    pub sum_products: f64,
}

impl PairedMoments {
    /// Computes the moments of two series of equal length.
    ///
    /// # Returns
    ///
    /// * `Some(PairedMoments)` - if both series are non-empty and of equal length
    /// * `None` - otherwise
    #[must_use]
    pub fn new(xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.len() != ys.len() {
            return None;
        }
        let mean_x = descriptive::mean(xs)?;
        let mean_y = descriptive::mean(ys)?;

        let mut sum_sq_x = 0.0;
        let mut sum_sq_y = 0.0;
        let mut sum_products = 0.0;
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sum_sq_x += dx * dx;
            sum_sq_y += dy * dy;
            sum_products += dx * dy;
        }

        Some(Self {
            count: xs.len(),
            mean_x,
            mean_y,
            sum_sq_x,
            sum_sq_y,
            sum_products,
        })
    }

    /// Population covariance.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn covariance(&self) -> f64 {
        self.sum_products / self.count as f64
    }

    /// Pearson correlation coefficient.
    ///
    /// Equivalent to `covariance / (std_dev_x * std_dev_y)`. If either series has
    /// zero variance the result is `NaN`.
    #[must_use]
    pub fn correlation(&self) -> f64 {
        self.sum_products / (self.sum_sq_x * self.sum_sq_y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn random_series(rng: &mut Pcg64Mcg, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-100.0..100.0)).collect()
    }

    #[test]
    fn test_rejects_empty_or_mismatched() {
        assert!(PairedMoments::new(&[], &[]).is_none());
        assert!(PairedMoments::new(&[1.0, 2.0], &[1.0]).is_none());
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let moments = PairedMoments::new(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0]).unwrap();
        assert!((moments.correlation() + 1.0).abs() < 1e-12);
        assert!(moments.covariance() < 0.0);
    }

    #[test]
    fn test_zero_variance_yields_nan() {
        let moments = PairedMoments::new(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap();
        assert!(moments.correlation().is_nan());
        assert_eq!(moments.covariance(), 0.0);
    }

    #[test]
    fn test_covariance_with_itself_is_variance() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for len in [1, 2, 10, 100] {
            let xs = random_series(&mut rng, len);
            let moments = PairedMoments::new(&xs, &xs).unwrap();
            let variance = descriptive::variance(&xs).unwrap();
            assert!((moments.covariance() - variance).abs() <= 1e-9 * variance.max(1.0));
        }
    }

    #[test]
    fn test_correlation_symmetric_and_bounded() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        for _ in 0..50 {
            let xs = random_series(&mut rng, 20);
            let ys = random_series(&mut rng, 20);
            let xy = PairedMoments::new(&xs, &ys).unwrap().correlation();
            let yx = PairedMoments::new(&ys, &xs).unwrap().correlation();
            assert!((xy - yx).abs() < 1e-12);
            assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&xy));
        }
    }
}
