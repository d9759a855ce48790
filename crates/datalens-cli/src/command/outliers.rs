use clap::Args;
use datalens_analyzer::{DEFAULT_OUTLIER_THRESHOLD, DataAnalyzer};

use crate::{command::InputArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct OutliersArg {
    #[command(flatten)]
    pub(crate) input: InputArg,

    /// Column to inspect
    #[arg(long)]
    pub(crate) column: String,

    /// Distance from the mean, in standard deviations, beyond which a value is an outlier
    #[arg(long, default_value_t = DEFAULT_OUTLIER_THRESHOLD)]
    pub(crate) threshold: f64,
}

pub(crate) fn run(arg: &OutliersArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset_file(&arg.input.input)?;
    let analyzer = DataAnalyzer::new(dataset);
    let outliers = analyzer.detect_outliers(&arg.column, arg.threshold)?;
    println!(
        "Outliers in {}: {}",
        arg.column,
        util::format_list(outliers)
    );
    Ok(())
}
