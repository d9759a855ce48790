//! Demonstration command
//!
//! Runs every analyzer operation over a small built-in dataset of five people
//! and prints the results.

use std::io::{self, Write};

use datalens_analyzer::{DEFAULT_OUTLIER_THRESHOLD, DataAnalyzer, Dataset, Record, Value};

use crate::util::format_list;

const DEMO_HISTOGRAM_BINS: usize = 5;

fn sample_dataset() -> Dataset {
    [
        ("John", 25, 50000),
        ("Jane", 30, 60000),
        ("Bob", 35, 70000),
        ("Alice", 40, 80000),
        ("Eve", 45, 90000),
    ]
    .into_iter()
    .map(|(name, age, salary)| {
        Record::from_iter([
            ("name", Value::from(name)),
            ("age", Value::from(age)),
            ("salary", Value::from(salary)),
        ])
    })
    .collect()
}

pub(crate) fn run() -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    write_report(sample_dataset(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn write_report<W>(dataset: Dataset, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let mut analyzer = DataAnalyzer::new(dataset);

    writeln!(out, "Mean Salary: {}", analyzer.mean("salary")?)?;
    writeln!(out, "Median Age: {}", analyzer.median("age")?)?;
    writeln!(out, "Mode Name: {}", format_list(analyzer.mode("name")?))?;
    writeln!(
        out,
        "Standard Deviation Salary: {}",
        analyzer.standard_deviation("salary")?
    )?;
    writeln!(
        out,
        "Correlation between Age and Salary: {}",
        analyzer.correlation("age", "salary")?
    )?;
    writeln!(
        out,
        "Outliers in Salary: {}",
        format_list(analyzer.detect_outliers("salary", DEFAULT_OUTLIER_THRESHOLD)?)
    )?;
    writeln!(
        out,
        "Unique Names: {}",
        format_list(analyzer.unique_values("name")?)
    )?;
    writeln!(
        out,
        "75th Percentile of Age: {}",
        analyzer.percentile("age", 75.0)?
    )?;
    writeln!(
        out,
        "Covariance between Age and Salary: {}",
        analyzer.covariance("age", "salary")?
    )?;

    analyzer.handle_missing_data();
    analyzer.plot_histogram("age", DEMO_HISTOGRAM_BINS, out)?;
    Ok(())
}
