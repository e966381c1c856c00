use energycalc::engine::config::RangeConfig;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns followed by a summary line.
    Table,
    /// Comma-separated values with an `x,energy` header.
    Csv,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub precision: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeAppConfig {
    pub range: RangeConfig,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotAppConfig {
    pub range: RangeConfig,
    pub plot: PlotSettings,
}
