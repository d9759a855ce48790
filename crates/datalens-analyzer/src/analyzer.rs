use std::io;

use datalens_stats::{
    association::PairedMoments,
    descriptive::{self, DescriptiveStats},
    frequency,
    histogram::{self, Histogram},
    outliers,
    percentiles::{self, Percentiles},
};
use tracing::debug;

use crate::{error::AnalyzeError, record::Record, value::Value};

/// Default `threshold` for [`DataAnalyzer::detect_outliers`], in standard deviations.
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 3.0;
/// Default bin count for [`DataAnalyzer::histogram`].
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;
/// Largest bin count accepted by [`DataAnalyzer::histogram`].
pub const MAX_HISTOGRAM_BINS: usize = 10_000;
/// Text written over missing values by [`DataAnalyzer::handle_missing_data`].
pub const MISSING_SENTINEL: &str = "N/A";
/// Bar character of the histogram rendering.
pub const HISTOGRAM_MARKER: char = histogram::DEFAULT_MARKER;

/// Statistics engine bound to a dataset.
///
/// The analyzer either owns its records (`Vec<Record>`) or borrows them
/// (`&[Record]` for queries, `&mut Vec<Record>` when
/// [`handle_missing_data`](Self::handle_missing_data) is needed). A caller that
/// lends its records sees the cleaning mutation once the analyzer is dropped.
///
/// Every operation projects the named column(s) afresh; nothing is cached.
/// Numeric operations fail with [`AnalyzeError::NonNumericValue`] on text or
/// missing cells, and every column operation fails with
/// [`AnalyzeError::EmptyDataset`] or [`AnalyzeError::ColumnNotFound`] when
/// there is nothing to project.
///
/// # Examples
///
/// ```
/// use datalens_analyzer::{DataAnalyzer, Record, Value};
///
/// let mut records = vec![
///     Record::from_iter([("age", Value::from(25)), ("city", Value::Missing)]),
///     Record::from_iter([("age", Value::from(35)), ("city", Value::from("Oslo"))]),
/// ];
///
/// let mut analyzer = DataAnalyzer::new(&mut records);
/// assert_eq!(analyzer.mean("age")?, 30.0);
/// analyzer.handle_missing_data();
/// drop(analyzer);
///
/// assert_eq!(records[0].value("city"), &Value::from("N/A"));
/// # Ok::<(), datalens_analyzer::AnalyzeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DataAnalyzer<D = Vec<Record>> {
    dataset: D,
}

impl<D> DataAnalyzer<D>
where
    D: AsRef<[Record]>,
{
    #[must_use]
    pub fn new(dataset: D) -> Self {
        Self { dataset }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        self.dataset.as_ref()
    }

    /// Gives the dataset back to the caller.
    pub fn into_inner(self) -> D {
        self.dataset
    }

    /// Column names in order of first appearance across records.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        frequency::distinct(self.records().iter().flat_map(Record::columns))
    }

    /// Projects a column across all records, in record order.
    ///
    /// Records that lack the column contribute [`Value::Missing`].
    pub fn column(&self, column: &str) -> Result<Vec<&Value>, AnalyzeError> {
        let records = self.records();
        if records.is_empty() {
            return Err(AnalyzeError::EmptyDataset);
        }
        if !records.iter().any(|record| record.contains_column(column)) {
            return Err(AnalyzeError::ColumnNotFound {
                column: column.to_owned(),
            });
        }
        Ok(records.iter().map(|record| record.value(column)).collect())
    }

    /// Projects a column as numbers, failing on the first non-numeric cell.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>, AnalyzeError> {
        self.column(column)?
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                value
                    .as_number()
                    .ok_or_else(|| AnalyzeError::NonNumericValue {
                        column: column.to_owned(),
                        row,
                        value: value.clone(),
                    })
            })
            .collect()
    }

    fn sorted_numeric_column(&self, column: &str) -> Result<Vec<f64>, AnalyzeError> {
        let mut values = self.numeric_column(column)?;
        values.sort_by(f64::total_cmp);
        Ok(values)
    }

    fn paired_moments(&self, column1: &str, column2: &str) -> Result<PairedMoments, AnalyzeError> {
        let xs = self.numeric_column(column1)?;
        let ys = self.numeric_column(column2)?;
        PairedMoments::new(&xs, &ys).ok_or(AnalyzeError::EmptyDataset)
    }

    /// Arithmetic mean of a numeric column.
    pub fn mean(&self, column: &str) -> Result<f64, AnalyzeError> {
        descriptive::mean(&self.numeric_column(column)?).ok_or(AnalyzeError::EmptyDataset)
    }

    /// Median of a numeric column; the average of the two central values when
    /// the number of records is even.
    pub fn median(&self, column: &str) -> Result<f64, AnalyzeError> {
        descriptive::median_of_sorted(&self.sorted_numeric_column(column)?)
            .ok_or(AnalyzeError::EmptyDataset)
    }

    /// Most frequent values of a column of any kind.
    ///
    /// All values tied at the highest frequency are returned, in the order in
    /// which they reached it.
    pub fn mode(&self, column: &str) -> Result<Vec<Value>, AnalyzeError> {
        Ok(frequency::modes(self.column(column)?)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Population variance of a numeric column.
    pub fn variance(&self, column: &str) -> Result<f64, AnalyzeError> {
        descriptive::variance(&self.numeric_column(column)?).ok_or(AnalyzeError::EmptyDataset)
    }

    /// Population standard deviation of a numeric column.
    pub fn standard_deviation(&self, column: &str) -> Result<f64, AnalyzeError> {
        self.variance(column).map(f64::sqrt)
    }

    /// Pearson correlation between two numeric columns.
    ///
    /// Returns `NaN` when either column has zero variance.
    pub fn correlation(&self, column1: &str, column2: &str) -> Result<f64, AnalyzeError> {
        Ok(self.paired_moments(column1, column2)?.correlation())
    }

    /// Population covariance between two numeric columns.
    pub fn covariance(&self, column1: &str, column2: &str) -> Result<f64, AnalyzeError> {
        Ok(self.paired_moments(column1, column2)?.covariance())
    }

    /// Nearest-rank percentile of a numeric column.
    ///
    /// `percentile` must lie in `[0, 100]`. The element of rank
    /// `ceil(percentile / 100 * n)` is returned, with `0` mapping to the minimum.
    /// For an even number of records the 50th percentile is the lower central
    /// value, so it differs from [`median`](Self::median) there.
    pub fn percentile(&self, column: &str, percentile: f64) -> Result<f64, AnalyzeError> {
        check_percentile(percentile)?;
        percentiles::nearest_rank(&self.sorted_numeric_column(column)?, percentile)
            .ok_or(AnalyzeError::EmptyDataset)
    }

    /// Nearest-rank percentiles of a numeric column at several points, sorting
    /// the column once.
    ///
    /// The result keeps the order of `points`. Every point must lie in `[0, 100]`.
    pub fn percentiles(
        &self,
        column: &str,
        points: &[f64],
    ) -> Result<Percentiles, AnalyzeError> {
        for &percentile in points {
            check_percentile(percentile)?;
        }
        Ok(Percentiles::from_sorted(
            &self.sorted_numeric_column(column)?,
            points,
        ))
    }

    /// Values lying strictly more than `threshold` standard deviations away
    /// from the mean, in record order, duplicates retained.
    pub fn detect_outliers(&self, column: &str, threshold: f64) -> Result<Vec<f64>, AnalyzeError> {
        Ok(outliers::detect(&self.numeric_column(column)?, threshold))
    }

    /// Distinct values of a column, in order of first occurrence.
    pub fn unique_values(&self, column: &str) -> Result<Vec<Value>, AnalyzeError> {
        Ok(frequency::distinct(self.column(column)?)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Descriptive summary (count, min, max, mean, median, variance, standard
    /// deviation) of a numeric column.
    pub fn summary(&self, column: &str) -> Result<DescriptiveStats, AnalyzeError> {
        DescriptiveStats::from_sorted(&self.sorted_numeric_column(column)?)
            .ok_or(AnalyzeError::EmptyDataset)
    }

    /// Equal-width histogram of a numeric column over its `[min, max]` range.
    ///
    /// The maximum value is counted in the last bin. `bins` must be between 1
    /// and [`MAX_HISTOGRAM_BINS`].
    pub fn histogram(&self, column: &str, bins: usize) -> Result<Histogram, AnalyzeError> {
        if !(1..=MAX_HISTOGRAM_BINS).contains(&bins) {
            return Err(AnalyzeError::InvalidBinCount { bins });
        }
        let values = self.numeric_column(column)?;
        debug!(column, bins, values = values.len(), "building histogram");
        Histogram::new(values, bins).ok_or(AnalyzeError::EmptyDataset)
    }

    /// Builds the histogram of a column and writes its textual rendering.
    ///
    /// ```text
    /// Histogram:
    /// 25.00 - 29.00: *
    /// 29.00 - 33.00: *
    /// ```
    pub fn plot_histogram<W>(
        &self,
        column: &str,
        bins: usize,
        out: &mut W,
    ) -> Result<Histogram, AnalyzeError>
    where
        W: io::Write + ?Sized,
    {
        let histogram = self.histogram(column, bins)?;
        write!(out, "{}", histogram.render(HISTOGRAM_MARKER))?;
        Ok(histogram)
    }
}

fn check_percentile(percentile: f64) -> Result<(), AnalyzeError> {
    if (0.0..=100.0).contains(&percentile) {
        Ok(())
    } else {
        Err(AnalyzeError::PercentileOutOfRange { percentile })
    }
}

impl<D> DataAnalyzer<D>
where
    D: AsRef<[Record]> + AsMut<[Record]>,
{
    /// Replaces every missing field of every record with [`MISSING_SENTINEL`].
    ///
    /// Returns the number of fields rewritten. Running it again rewrites nothing.
    pub fn handle_missing_data(&mut self) -> usize {
        let mut replaced = 0;
        for record in self.dataset.as_mut() {
            for value in record.values_mut().filter(|value| value.is_missing()) {
                *value = Value::from(MISSING_SENTINEL);
                replaced += 1;
            }
        }
        debug!(replaced, "substituted missing values");
        replaced
    }
}
