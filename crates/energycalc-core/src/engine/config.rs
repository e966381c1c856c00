use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Settings for evaluating `Energy(x)` over the inclusive range `[start, end]`.
///
/// Bounds are not validated here; [`crate::workflows::evaluate::run`] rejects invalid
/// ranges before any evaluation happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConfig {
    pub start: i64,
    pub end: i64,
    /// Spread evaluation over the rayon thread pool. Output order is unaffected.
    pub parallel: bool,
}

#[derive(Default)]
pub struct RangeConfigBuilder {
    start: Option<i64>,
    end: Option<i64>,
    parallel: Option<bool>,
}

impl RangeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }
    pub fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn build(self) -> Result<RangeConfig, ConfigError> {
        Ok(RangeConfig {
            start: self.start.ok_or(ConfigError::MissingParameter("start"))?,
            end: self.end.ok_or(ConfigError::MissingParameter("end"))?,
            parallel: self.parallel.unwrap_or(false),
        })
    }
}
