use super::models::OutputFormat;

pub struct DefaultsConfig {
    pub start: i64,
    pub end: i64,
    pub parallel: bool,
    pub format: OutputFormat,
    pub precision: usize,
    pub plot_width: u32,
    pub plot_height: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 100,
            parallel: false,
            format: OutputFormat::Table,
            precision: 6,
            plot_width: 1400,
            plot_height: 700,
        }
    }
}
