use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use self::{
    clean::CleanArg, correlate::CorrelateArg, describe::DescribeArg, histogram::HistogramArg,
    outliers::OutliersArg,
};

mod clean;
mod correlate;
mod demo;
mod describe;
mod histogram;
mod outliers;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run the built-in demonstration over a five-person dataset
    Demo,
    /// Summarize one numeric column as JSON
    Describe(#[clap(flatten)] DescribeArg),
    /// Print an equal-width histogram of one numeric column
    Histogram(#[clap(flatten)] HistogramArg),
    /// Compute covariance and correlation between two numeric columns
    Correlate(#[clap(flatten)] CorrelateArg),
    /// List values far from the mean of a numeric column
    Outliers(#[clap(flatten)] OutliersArg),
    /// Replace missing values and write the dataset back as JSON
    Clean(#[clap(flatten)] CleanArg),
}

/// Dataset location shared by every command that reads one.
#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to a JSON file holding an array of records
    #[arg(long, short)]
    pub(crate) input: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Demo) {
        Mode::Demo => demo::run()?,
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Histogram(arg) => histogram::run(&arg)?,
        Mode::Correlate(arg) => correlate::run(&arg)?,
        Mode::Outliers(arg) => outliers::run(&arg)?,
        Mode::Clean(arg) => clean::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_demo() {
        let args = CommandArgs::try_parse_from(["datalens"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_histogram_default_bins() {
        let args =
            CommandArgs::try_parse_from(["datalens", "histogram", "-i", "d.json", "--column", "age"])
                .unwrap();
        let Some(Mode::Histogram(arg)) = args.mode else {
            panic!("expected histogram mode");
        };
        assert_eq!(arg.bins, datalens_analyzer::DEFAULT_HISTOGRAM_BINS);
        assert_eq!(arg.input.input, PathBuf::from("d.json"));
    }

    #[test]
    fn test_correlate_needs_two_columns() {
        assert!(
            CommandArgs::try_parse_from(["datalens", "correlate", "-i", "d.json", "--columns", "a"])
                .is_err()
        );
        assert!(
            CommandArgs::try_parse_from([
                "datalens", "correlate", "-i", "d.json", "--columns", "a", "b"
            ])
            .is_ok()
        );
    }
}
