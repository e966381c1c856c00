pub mod eval;
pub mod plot;
pub mod range;
