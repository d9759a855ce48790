use std::path::PathBuf;

use clap::Args;
use datalens_analyzer::{DEFAULT_OUTLIER_THRESHOLD, DataAnalyzer, Record, Value};
use serde::Serialize;

use crate::{command::InputArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct DescribeArg {
    #[command(flatten)]
    pub(crate) input: InputArg,

    /// Column to summarize
    #[arg(long)]
    pub(crate) column: String,

    /// Percentile points to report (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [25.0, 50.0, 75.0])]
    pub(crate) percentiles: Vec<f64>,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct ColumnReport {
    column: String,
    count: usize,
    min: f64,
    max: f64,
    mean: f64,
    median: f64,
    mode: Vec<Value>,
    variance: f64,
    std_dev: f64,
    percentiles: Vec<PercentileEntry>,
    outliers: Vec<f64>,
    unique_count: usize,
}

#[derive(Debug, Clone, Serialize)]
struct PercentileEntry {
    percentile: f64,
    value: f64,
}

impl ColumnReport {
    fn build(
        analyzer: &DataAnalyzer<Vec<Record>>,
        column: &str,
        percentile_points: &[f64],
    ) -> anyhow::Result<Self> {
        let summary = analyzer.summary(column)?;
        let percentiles = analyzer
            .percentiles(column, percentile_points)?
            .iter()
            .map(|(percentile, value)| PercentileEntry { percentile, value })
            .collect();

        Ok(Self {
            column: column.to_owned(),
            count: summary.count,
            min: summary.min,
            max: summary.max,
            mean: summary.mean,
            median: summary.median,
            mode: analyzer.mode(column)?,
            variance: summary.variance,
            std_dev: summary.std_dev,
            percentiles,
            outliers: analyzer.detect_outliers(column, DEFAULT_OUTLIER_THRESHOLD)?,
            unique_count: analyzer.unique_values(column)?.len(),
        })
    }
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset_file(&arg.input.input)?;
    let analyzer = DataAnalyzer::new(dataset);
    let report = ColumnReport::build(&analyzer, &arg.column, &arg.percentiles)?;
    util::Output::save_json(&report, arg.output.clone())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_report() {
        let records: Vec<Record> = [10, 20, 20, 30]
            .into_iter()
            .map(|v| Record::from_iter([("score", v)]))
            .collect();
        let analyzer = DataAnalyzer::new(records);
        let report = ColumnReport::build(&analyzer, "score", &[50.0, 100.0]).unwrap();

        assert_eq!(report.count, 4);
        assert_eq!(report.mean, 20.0);
        assert_eq!(report.median, 20.0);
        assert_eq!(report.mode, [Value::from(20)]);
        assert_eq!(report.unique_count, 3);
        assert!(report.outliers.is_empty());
        assert_eq!(report.percentiles[1].percentile, 100.0);
        assert_eq!(report.percentiles[1].value, 30.0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["column"], "score");
        assert_eq!(json["percentiles"][0]["value"], 20.0);
    }

    #[test]
    fn test_column_report_rejects_bad_percentile() {
        let records = vec![Record::from_iter([("score", 1)])];
        let analyzer = DataAnalyzer::new(records);
        let err = ColumnReport::build(&analyzer, "score", &[150.0]).unwrap_err();
        assert_eq!(err.to_string(), "percentile 150 is outside [0, 100]");
    }
}
