//! # Core Module
//!
//! The stateless foundation of the library: the arithmetic of the `Energy(x)` formula and
//! the value types that carry its results.
//!
//! - **Formula** ([`formula`]) - The four parts of the expression and their combination
//! - **Samples** ([`sample`]) - `(x, energy)` pairs and ordered series of them
//!
//! Functions in this module take already-validated input and never fail. Input validation
//! lives in [`crate::workflows`].

pub mod formula;
pub mod sample;
