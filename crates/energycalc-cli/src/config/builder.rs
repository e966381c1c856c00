use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileRangeConfig};
use super::models::{OutputFormat, OutputSettings, PlotAppConfig, PlotSettings, RangeAppConfig};
use crate::cli::{PlotArgs, RangeArgs, WindowArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use energycalc::engine::config::{RangeConfig, RangeConfigBuilder};
use std::path::Path;
use tracing::debug;

pub fn build_range_config(args: &RangeArgs, config_path: Option<&Path>) -> Result<RangeAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(config_path, &args.window.set_values)?;

    let range = merge_range(&args.window, file_config.range.take(), &defaults)?;

    let output_file = file_config.output.take().unwrap_or_default();
    let output = OutputSettings {
        format: args
            .format
            .or(output_file.format)
            .unwrap_or(defaults.format),
        precision: args
            .precision
            .or(output_file.precision)
            .unwrap_or(defaults.precision),
    };

    debug!("Resolved range configuration: {:?} {:?}", range, output);
    Ok(RangeAppConfig { range, output })
}

pub fn build_plot_config(args: &PlotArgs, config_path: Option<&Path>) -> Result<PlotAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(config_path, &args.window.set_values)?;

    let range = merge_range(&args.window, file_config.range.take(), &defaults)?;

    let plot_file = file_config.plot.take().unwrap_or_default();
    let width = args
        .width
        .or(plot_file.width)
        .unwrap_or(defaults.plot_width);
    let height = args
        .height
        .or(plot_file.height)
        .unwrap_or(defaults.plot_height);
    if width == 0 || height == 0 {
        return Err(CliError::Config(format!(
            "Plot dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    let title = args
        .title
        .clone()
        .or(plot_file.title)
        .unwrap_or_else(|| default_title(range.start, range.end));

    let plot = PlotSettings {
        output: args.output.clone(),
        width,
        height,
        title,
    };

    debug!("Resolved plot configuration: {:?} {:?}", range, plot);
    Ok(PlotAppConfig { range, plot })
}

pub fn default_title(start: i64, end: i64) -> String {
    format!("Energy(x) in Range [{}, {}]", start, end)
}

fn load_file_config(config_path: Option<&Path>, set_values: &[String]) -> Result<FileConfig> {
    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    apply_set_values(file_config, set_values)
}

fn merge_range(
    window: &WindowArgs,
    file_val: Option<FileRangeConfig>,
    defaults: &DefaultsConfig,
) -> Result<RangeConfig> {
    let file_val = file_val.unwrap_or_default();
    RangeConfigBuilder::new()
        .start(window.start.or(file_val.start).unwrap_or(defaults.start))
        .end(window.end.or(file_val.end).unwrap_or(defaults.end))
        .parallel(
            window
                .parallel
                .requested()
                .or(file_val.parallel)
                .unwrap_or(defaults.parallel),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let invalid = |e: parser::ParseError| CliError::Config(e.to_string());

        match key {
            "range.start" => {
                config.range.get_or_insert_with(Default::default).start =
                    Some(parser::parse_value(key, value, "integer").map_err(invalid)?);
            }
            "range.end" => {
                config.range.get_or_insert_with(Default::default).end =
                    Some(parser::parse_value(key, value, "integer").map_err(invalid)?);
            }
            "range.parallel" => {
                config.range.get_or_insert_with(Default::default).parallel =
                    Some(parser::parse_value(key, value, "boolean").map_err(invalid)?);
            }
            "output.precision" => {
                config.output.get_or_insert_with(Default::default).precision =
                    Some(parser::parse_value(key, value, "integer").map_err(invalid)?);
            }
            "output.format" => {
                let format = match value {
                    "table" => OutputFormat::Table,
                    "csv" => OutputFormat::Csv,
                    _ => {
                        return Err(CliError::Config(format!(
                            "Invalid format for {}: '{}'. Expected 'table' or 'csv'.",
                            key, value
                        )));
                    }
                };
                config.output.get_or_insert_with(Default::default).format = Some(format);
            }
            "plot.width" => {
                config.plot.get_or_insert_with(Default::default).width =
                    Some(parser::parse_value(key, value, "integer").map_err(invalid)?);
            }
            "plot.height" => {
                config.plot.get_or_insert_with(Default::default).height =
                    Some(parser::parse_value(key, value, "integer").map_err(invalid)?);
            }
            "plot.title" => {
                config.plot.get_or_insert_with(Default::default).title = Some(value.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
