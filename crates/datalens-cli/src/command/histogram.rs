use std::io::{self, Write as _};

use clap::Args;
use datalens_analyzer::{DEFAULT_HISTOGRAM_BINS, DataAnalyzer};

use crate::{command::InputArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct HistogramArg {
    #[command(flatten)]
    pub(crate) input: InputArg,

    /// Column to plot
    #[arg(long)]
    pub(crate) column: String,

    /// Number of equal-width bins
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub(crate) bins: usize,

    /// Replace missing values before plotting
    #[arg(long)]
    pub(crate) clean: bool,
}

pub(crate) fn run(arg: &HistogramArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset_file(&arg.input.input)?;
    let mut analyzer = DataAnalyzer::new(dataset);
    if arg.clean {
        analyzer.handle_missing_data();
    }

    let mut out = io::stdout().lock();
    let histogram = analyzer.plot_histogram(&arg.column, arg.bins, &mut out)?;
    out.flush()?;
    tracing::info!(
        column = %arg.column,
        counted = histogram.total_count(),
        "histogram plotted"
    );
    Ok(())
}
