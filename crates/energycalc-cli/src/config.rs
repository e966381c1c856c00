//! Configuration for the CLI: hard-coded defaults, an optional TOML file, `-S` overrides
//! and command-line flags, merged in that order of increasing priority.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
