//! # Engine Module
//!
//! Support types shared by the evaluation workflows.
//!
//! - **Configuration** ([`config`]) - Range evaluation settings and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Validation failures raised by the public API

pub mod config;
pub mod error;
pub mod progress;
