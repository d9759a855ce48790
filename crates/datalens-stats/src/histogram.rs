use std::{fmt, ops::Range};

/// Marker character used by the textual rendering, one per counted value.
pub const DEFAULT_MARKER: char = '*';

/// An equal-width histogram of a dataset's distribution.
///
/// The range `[min, max]` of the data is split into `num_bins` bins of equal width.
/// Every bin is half-open (`start..end`) except that the maximum value is always
/// counted in the last bin, so the bin counts sum to the number of input values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending range order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: usize,
}

impl HistogramBin {
    /// Label of the bin range, formatted as `"start - end"` with two decimals.
    ///
    /// ```
    /// # use datalens_stats::histogram::HistogramBin;
    /// let bin = HistogramBin { range: 25.0..29.0, count: 1 };
    /// assert_eq!(bin.label(), "25.00 - 29.00");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.2} - {:.2}", self.range.start, self.range.end)
    }
}

impl Histogram {
    /// Creates an equal-width histogram from values in any order.
    ///
    /// Each value is assigned to bin `floor((value - min) / width)`, clamped to
    /// the last bin. When all values are equal the width is zero and every value
    /// lands in the first bin.
    ///
    /// # Returns
    ///
    /// * `Some(Histogram)` - if there is at least one value and `num_bins > 0`
    /// * `None` - otherwise, or when `num_bins` bins cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// # use datalens_stats::histogram::Histogram;
    /// let values = [25.0, 30.0, 35.0, 40.0, 45.0];
    /// let histogram = Histogram::new(values, 5).unwrap();
    /// let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
    /// assert_eq!(counts, [1, 1, 1, 1, 1]);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() || num_bins == 0 {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bin_width = (max - min) / num_bins as f64;

        let mut bins = Vec::new();
        bins.try_reserve_exact(num_bins).ok()?;
        // Recompute each boundary from `min` to avoid accumulating rounding errors
        bins.extend((0..num_bins).map(|bin_idx| HistogramBin {
            range: (min + bin_idx as f64 * bin_width)..(min + (bin_idx + 1) as f64 * bin_width),
            count: 0,
        }));

        for val in values {
            let idx = if bin_width > 0.0 {
                ((val - min) / bin_width).floor() as usize
            } else {
                0
            };
            bins[idx.min(num_bins - 1)].count += 1;
        }

        Some(Self { bins })
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering one bar per bin
    /// with the given marker character.
    #[must_use]
    pub fn render(&self, marker: char) -> HistogramDisplay<'_> {
        HistogramDisplay {
            histogram: self,
            marker,
        }
    }
}

/// Renders the histogram with [`DEFAULT_MARKER`].
///
/// ```text
/// Histogram:
/// 25.00 - 29.00: *
/// 29.00 - 33.00: *
/// ```
impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(DEFAULT_MARKER).fmt(f)
    }
}

/// Textual rendering of a [`Histogram`], created by [`Histogram::render`].
#[derive(Debug, Clone, Copy)]
pub struct HistogramDisplay<'a> {
    histogram: &'a Histogram,
    marker: char,
}

impl fmt::Display for HistogramDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Histogram:")?;
        for bin in &self.histogram.bins {
            let bar = std::iter::repeat_n(self.marker, bin.count).collect::<String>();
            writeln!(f, "{}: {bar}", bin.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_or_zero_bins() {
        assert!(Histogram::new([], 5).is_none());
        assert!(Histogram::new([1.0, 2.0], 0).is_none());
    }

    #[test]
    fn test_unallocatable_bin_count() {
        assert!(Histogram::new([1.0, 2.0], usize::MAX).is_none());
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let histogram = Histogram::new([0.0, 1.0, 2.0, 3.0, 4.0, 10.0], 5).unwrap();
        assert_eq!(histogram.bins.len(), 5);
        assert_eq!(histogram.bins[4].count, 1);
        assert_eq!(histogram.total_count(), 6);
    }

    #[test]
    fn test_equal_width_boundaries() {
        let histogram = Histogram::new([0.0, 10.0], 4).unwrap();
        let labels = histogram
            .bins
            .iter()
            .map(HistogramBin::label)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["0.00 - 2.50", "2.50 - 5.00", "5.00 - 7.50", "7.50 - 10.00"]
        );
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[3].count, 1);
    }

    #[test]
    fn test_constant_values_fill_first_bin() {
        let histogram = Histogram::new([3.0, 3.0, 3.0], 3).unwrap();
        let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts, [3, 0, 0]);
        assert_eq!(histogram.bins[0].label(), "3.00 - 3.00");
    }

    #[test]
    fn test_rendering_format() {
        let histogram = Histogram::new([25.0, 30.0, 35.0, 40.0, 45.0, 45.0], 5).unwrap();
        let expected = "Histogram:\n\
                        25.00 - 29.00: *\n\
                        29.00 - 33.00: *\n\
                        33.00 - 37.00: *\n\
                        37.00 - 41.00: *\n\
                        41.00 - 45.00: **\n";
        assert_eq!(histogram.to_string(), expected);
    }

    #[test]
    fn test_rendering_with_custom_marker() {
        let histogram = Histogram::new([1.0, 1.0, 2.0], 1).unwrap();
        assert_eq!(
            histogram.render('#').to_string(),
            "Histogram:\n1.00 - 2.00: ###\n"
        );
    }
}
