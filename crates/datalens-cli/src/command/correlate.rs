use clap::Args;
use datalens_analyzer::DataAnalyzer;

use crate::{command::InputArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct CorrelateArg {
    #[command(flatten)]
    pub(crate) input: InputArg,

    /// The two columns to compare
    #[arg(long, num_args = 2, value_names = ["COLUMN1", "COLUMN2"])]
    pub(crate) columns: Vec<String>,
}

pub(crate) fn run(arg: &CorrelateArg) -> anyhow::Result<()> {
    let [column1, column2] = arg.columns.as_slice() else {
        anyhow::bail!("expected exactly two columns, got {}", arg.columns.len());
    };
    let dataset = util::read_dataset_file(&arg.input.input)?;
    let analyzer = DataAnalyzer::new(dataset);

    let covariance = analyzer.covariance(column1, column2)?;
    let correlation = analyzer.correlation(column1, column2)?;
    if correlation.is_nan() {
        tracing::warn!("correlation is undefined: a column has zero variance");
    }

    println!("Covariance between {column1} and {column2}: {covariance}");
    println!("Correlation between {column1} and {column2}: {correlation}");
    Ok(())
}
