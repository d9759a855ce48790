//! Statistics engine over small, in-memory tabular datasets.
//!
//! A dataset is an ordered sequence of [`Record`]s, each mapping column names to
//! [`Value`]s (numbers, text, or missing). [`DataAnalyzer`] binds to a dataset and
//! answers independent queries about one or two named columns:
//!
//! - central tendency: [`mean`](DataAnalyzer::mean), [`median`](DataAnalyzer::median),
//!   [`mode`](DataAnalyzer::mode)
//! - dispersion: [`variance`](DataAnalyzer::variance),
//!   [`standard_deviation`](DataAnalyzer::standard_deviation),
//!   [`percentile`](DataAnalyzer::percentile), [`percentiles`](DataAnalyzer::percentiles),
//!   [`summary`](DataAnalyzer::summary)
//! - association: [`covariance`](DataAnalyzer::covariance),
//!   [`correlation`](DataAnalyzer::correlation)
//! - diagnostics: [`detect_outliers`](DataAnalyzer::detect_outliers),
//!   [`histogram`](DataAnalyzer::histogram), [`plot_histogram`](DataAnalyzer::plot_histogram)
//! - cleaning: [`unique_values`](DataAnalyzer::unique_values),
//!   [`handle_missing_data`](DataAnalyzer::handle_missing_data)
//!
//! The numeric work is delegated to [`datalens_stats`].
//!
//! # Examples
//!
//! ```
//! use datalens_analyzer::{DataAnalyzer, Record, Value};
//!
//! let records = [(25, 50000), (30, 60000), (35, 70000), (40, 80000), (45, 90000)]
//!     .into_iter()
//!     .map(|(age, salary)| Record::from_iter([("age", age), ("salary", salary)]))
//!     .collect::<Vec<_>>();
//! let analyzer = DataAnalyzer::new(records);
//!
//! assert_eq!(analyzer.mean("salary")?, 70000.0);
//! assert_eq!(analyzer.median("age")?, 35.0);
//! assert_eq!(analyzer.percentile("age", 75.0)?, 40.0);
//! assert_eq!(analyzer.covariance("age", "salary")?, 100_000.0);
//! # Ok::<(), datalens_analyzer::AnalyzeError>(())
//! ```

pub use self::{
    analyzer::{
        DEFAULT_HISTOGRAM_BINS, DEFAULT_OUTLIER_THRESHOLD, DataAnalyzer, HISTOGRAM_MARKER,
        MAX_HISTOGRAM_BINS, MISSING_SENTINEL,
    },
    error::AnalyzeError,
    record::{Dataset, Record},
    value::Value,
};

pub mod analyzer;
pub mod error;
pub mod record;
pub mod value;
