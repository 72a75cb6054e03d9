//! Bounded arithmetic: add, subtract, multiply and divide over operands
//! restricted to `[-1_000_000, 1_000_000]`.

#[macro_use]
mod macros;

/// This module provides the prelude for calculator users.
pub mod prelude {
    pub use crate::calculator::*;
    pub use crate::constants::range::{MAX_VALUE, MIN_VALUE};
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::operation::*;
    pub use crate::types::*;
}

pub mod calculator;
pub mod constants;
pub mod error;
pub mod operation;
pub mod types;
