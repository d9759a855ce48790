use std::io;

use crate::value::Value;

/// Errors produced by [`DataAnalyzer`](crate::DataAnalyzer) operations.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AnalyzeError {
    #[display("dataset has no records")]
    EmptyDataset,
    #[display("column '{column}' not found")]
    ColumnNotFound { column: String },
    #[display("non-numeric value {value} in column '{column}' at row {row}")]
    NonNumericValue {
        column: String,
        row: usize,
        value: Value,
    },
    #[display("percentile {percentile} is outside [0, 100]")]
    PercentileOutOfRange { percentile: f64 },
    #[display(
        "histogram bin count {bins} is outside [1, {}]",
        crate::analyzer::MAX_HISTOGRAM_BINS
    )]
    InvalidBinCount { bins: usize },
    #[display("failed to write histogram: {_0}")]
    #[from]
    Io(io::Error),
}
