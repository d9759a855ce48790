use std::path::PathBuf;

use clap::Args;
use datalens_analyzer::DataAnalyzer;

use crate::{command::InputArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct CleanArg {
    #[command(flatten)]
    pub(crate) input: InputArg,

    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CleanArg) -> anyhow::Result<()> {
    let mut dataset = util::read_dataset_file(&arg.input.input)?;
    let replaced = DataAnalyzer::new(&mut dataset).handle_missing_data();
    tracing::info!(replaced, "missing values substituted");
    util::Output::save_json(&dataset, arg.output.clone())?;
    Ok(())
}
