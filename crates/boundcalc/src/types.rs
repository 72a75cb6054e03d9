use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseNumberError;

/// An operand or result: an integer or a floating-point value.
///
/// Equality is numeric, so `Number::Int(8) == Number::Float(8.0)`.
///
/// ```
/// use boundcalc::prelude::*;
///
/// assert_eq!(Number::from(5) + Number::from(3), 8);
/// assert_eq!(Number::from(2.5) + Number::from(1), 3.5);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// `true` for `0` and for both signed float zeros.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    /// Returns whether `min <= self <= max`. NaN is never within any range.
    pub fn is_within(self, min: i64, max: i64) -> bool {
        match self {
            Number::Int(v) => (min..=max).contains(&v),
            Number::Float(v) => min as f64 <= v && v <= max as f64,
        }
    }
}

impl_from_primitive!(Int(i64): i8, i16, i32, i64, u8, u16, u32);
impl_from_primitive!(Float(f64): f32, f64);
impl_from_wide_int!(isize, usize, u64, i128, u128);

impl_binary_op!(Add, add, checked_add, +);
impl_binary_op!(Sub, sub, checked_sub, -);
impl_binary_op!(Mul, mul, checked_mul, *);

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Int(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Parses an integer literal as `Number::Int`, anything else `f64` accepts
/// as `Number::Float`.
impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(v) = s.parse::<i64>() {
            return Ok(Number::Int(v));
        }

        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| ParseNumberError(s.to_string()))
    }
}
