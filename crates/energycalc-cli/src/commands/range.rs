use crate::cli::RangeArgs;
use crate::config::builder;
use crate::error::Result;
use crate::output;
use crate::utils::progress::CliProgressHandler;
use energycalc::engine::progress::ProgressReporter;
use energycalc::workflows::evaluate;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(
    args: RangeArgs,
    config_path: Option<&Path>,
    progress: &CliProgressHandler,
) -> Result<()> {
    let stdout = std::io::stdout();
    execute(&args, config_path, progress, stdout.lock())
}

fn execute<W: Write>(
    args: &RangeArgs,
    config_path: Option<&Path>,
    progress: &CliProgressHandler,
    out: W,
) -> Result<()> {
    let app_config = builder::build_range_config(args, config_path)?;

    let reporter = ProgressReporter::with_callback(progress.get_callback());
    let series = evaluate::run(&app_config.range, &reporter)?;
    info!("Writing {} sample(s) as {:?}.", series.len(), app_config.output.format);

    output::write_series(&series, &app_config.output, out)
}
