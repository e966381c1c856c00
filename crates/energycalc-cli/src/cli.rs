use crate::config::models::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "energycalc - evaluate the Energy(x) formula over non-negative integers, print it, or plot it.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by `--parallel` evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate Energy(x) for a single non-negative integer.
    Eval(EvalArgs),
    /// Evaluate Energy(x) over an inclusive range and print the results.
    Range(RangeArgs),
    /// Evaluate Energy(x) over an inclusive range and render it as an SVG chart.
    Plot(PlotArgs),
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// The input value.
    #[arg(allow_negative_numbers = true, value_name = "X")]
    pub x: i64,

    /// Also print the four intermediate parts of the formula.
    #[arg(long)]
    pub breakdown: bool,
}

/// Range selection shared by `range` and `plot`.
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// First input of the range (inclusive). Overrides `range.start` from the config file.
    #[arg(short, long, allow_negative_numbers = true, value_name = "INT")]
    pub start: Option<i64>,

    /// Last input of the range (inclusive). Overrides `range.end` from the config file.
    #[arg(short, long, allow_negative_numbers = true, value_name = "INT")]
    pub end: Option<i64>,

    /// Override `range.parallel` from the config file.
    #[command(flatten)]
    pub parallel: ParallelMode,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S range.end=250
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// A group to handle mutually exclusive flags for parallel evaluation.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct ParallelMode {
    /// Evaluate the range on the thread pool.
    #[arg(long)]
    pub parallel: bool,
    /// Evaluate the range sequentially, even if the config file enables parallelism.
    #[arg(long)]
    pub no_parallel: bool,
}

impl ParallelMode {
    /// The setting requested on the command line, if any.
    pub fn requested(&self) -> Option<bool> {
        match (self.parallel, self.no_parallel) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the `range` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Output format written to stdout.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Number of decimal places in table output. CSV output always keeps full precision.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<usize>,
}

/// Arguments for the `plot` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct PlotArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Path of the SVG file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Chart width in pixels.
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Chart height in pixels.
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Chart title. Defaults to "Energy(x) in Range [START, END]".
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn eval_accepts_negative_input_for_core_validation() {
        let cli = Cli::try_parse_from(["energycalc", "eval", "-1"]).unwrap();
        match cli.command {
            Commands::Eval(args) => assert_eq!(args.x, -1),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn range_parses_window_and_overrides() {
        let cli = Cli::try_parse_from([
            "energycalc",
            "-vv",
            "range",
            "--start",
            "3",
            "--end",
            "9",
            "--format",
            "csv",
            "-S",
            "output.precision=2",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Range(args) => {
                assert_eq!(args.window.start, Some(3));
                assert_eq!(args.window.end, Some(9));
                assert_eq!(args.format, Some(OutputFormat::Csv));
                assert_eq!(args.window.set_values, vec!["output.precision=2"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn plot_requires_output_path() {
        assert!(Cli::try_parse_from(["energycalc", "plot"]).is_err());
    }

    #[test]
    fn parallel_flags_are_mutually_exclusive() {
        assert!(
            Cli::try_parse_from(["energycalc", "range", "--parallel", "--no-parallel"]).is_err()
        );

        let cli = Cli::try_parse_from(["energycalc", "range", "--no-parallel"]).unwrap();
        match cli.command {
            Commands::Range(args) => assert_eq!(args.window.parallel.requested(), Some(false)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["energycalc", "-q", "-v", "eval", "1"]).is_err());
    }
}
