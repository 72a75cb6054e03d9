use thiserror::Error;

use crate::{
    constants::{
        message,
        range::{MAX_VALUE, MIN_VALUE},
    },
    types::Number,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An operand lies outside `[min, max]`.
    #[error("Input {value} is outside valid range [{min}, {max}]")]
    RangeViolation { value: Number, min: i64, max: i64 },
    /// Raised by `divide` only, after both operands passed range validation.
    #[error("{}", message::DIVISION_BY_ZERO)]
    DivisionByZero,
}

impl CalcError {
    /// Range violation for `value` against the fixed operand bounds.
    pub fn range_violation(value: Number) -> Self {
        CalcError::RangeViolation {
            value,
            min: MIN_VALUE,
            max: MAX_VALUE,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number: {0:?}")]
pub struct ParseNumberError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation: {0:?} (expected add, subtract, multiply or divide)")]
pub struct ParseOperationError(pub String);
