//! Statistical kernels for the datalens project.
//!
//! This crate operates on plain slices of numbers (or any hashable values for the
//! frequency statistics) and knows nothing about records or columns. It provides:
//!
//! - **Descriptive statistics**: mean, median, population variance and standard deviation
//! - **Percentiles**: nearest-rank percentile computation and storage
//! - **Histograms**: equal-width binning with a textual bar rendering
//! - **Association**: population covariance and Pearson correlation from one pass
//! - **Outliers**: values beyond `mean ± k * std_dev`
//! - **Frequency**: modes and distinct values in first-occurrence order
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Nearest-rank percentile computation and storage
//! - [`histogram`]: Equal-width histograms for visualizing data distributions
//! - [`association`]: Covariance and correlation between paired series
//! - [`outliers`]: Standard-deviation based outlier detection
//! - [`frequency`]: Modes and distinct values
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use datalens_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use datalens_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
//! assert_eq!(percentiles.get(50.0), Some(3.0));
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use datalens_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::new(values, 5).unwrap();
//! assert_eq!(histogram.total_count(), 10);
//! println!("{histogram}");
//! ```

pub mod association;
pub mod descriptive;
pub mod frequency;
pub mod histogram;
pub mod outliers;
pub mod percentiles;
