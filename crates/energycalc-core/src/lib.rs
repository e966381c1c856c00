//! # energycalc Core Library
//!
//! Evaluation of the closed-form `Energy(x)` formula over non-negative integers, either
//! one point at a time or over an inclusive integer range.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the arithmetic stays isolated from
//! validation, configuration and reporting concerns.
//!
//! - **[`core`]: The Foundation.** Pure mathematics (`formula`) and the stateless result
//!   types (`sample`). Nothing in this layer can fail.
//!
//! - **[`engine`]: The Support Layer.** Error types, range evaluation settings and the
//!   progress reporting hook used by long-running evaluations.
//!
//! - **[`workflows`]: The Public API.** Validated entry points that tie the formula to
//!   its input constraints: [`calculate`], [`calculate_range`] and the configurable
//!   [`workflows::evaluate::run`].
//!
//! ## Example
//!
//! ```
//! use energycalc::{calculate, calculate_range};
//!
//! let single = calculate(2).unwrap();
//! let series = calculate_range(0, 2).unwrap();
//!
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.samples()[2].energy, single);
//! assert!(calculate(-1).is_err());
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

pub use workflows::evaluate::{calculate, calculate_range};
