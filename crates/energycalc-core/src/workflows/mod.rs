//! Validated entry points into the library.
//!
//! [`evaluate`] exposes the single-point and range evaluators plus a configurable
//! range workflow with progress reporting and optional parallelism.

pub mod evaluate;
