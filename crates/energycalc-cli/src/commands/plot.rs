use crate::cli::PlotArgs;
use crate::config::builder;
use crate::error::Result;
use crate::plot;
use crate::utils::progress::CliProgressHandler;
use energycalc::engine::progress::ProgressReporter;
use energycalc::workflows::evaluate;
use std::path::Path;
use tracing::info;

pub fn run(
    args: PlotArgs,
    config_path: Option<&Path>,
    progress: &CliProgressHandler,
) -> Result<()> {
    let app_config = builder::build_plot_config(&args, config_path)?;

    let reporter = ProgressReporter::with_callback(progress.get_callback());
    let series = evaluate::run(&app_config.range, &reporter)?;

    info!("Rendering {} point(s) to {:?}", series.len(), &app_config.plot.output);
    plot::render_svg(&series, &app_config.plot)?;

    println!(
        "Plot of Energy(x) over [{}, {}] written to: {}",
        app_config.range.start,
        app_config.range.end,
        app_config.plot.output.display()
    );
    Ok(())
}
