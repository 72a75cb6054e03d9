pub mod eval;
pub mod ops;
