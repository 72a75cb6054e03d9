use crate::{
    constants::range::{MAX_VALUE, MIN_VALUE},
    error::{CalcError, CalcResult},
    types::Number,
};

/// Four-operation calculator with bounded operands.
///
/// Every operand must lie within [`MIN_VALUE`, `MAX_VALUE`] (inclusive).
/// Only inputs are checked; a result may leave the range.
///
/// ```
/// use boundcalc::prelude::*;
///
/// let calc = Calculator::new();
/// assert_eq!(calc.add(5, 3)?, 8);
/// assert_eq!(calc.divide(10, 2)?, 5.0);
/// assert_eq!(calc.divide(5, 0), Err(CalcError::DivisionByZero));
/// # Ok::<(), CalcError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }

    /// Returns `a + b`.
    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        let (a, b) = validate(a.into(), b.into())?;
        Ok(a + b)
    }

    /// Returns `a - b`.
    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        let (a, b) = validate(a.into(), b.into())?;
        Ok(a - b)
    }

    /// Returns `a * b`.
    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        let (a, b) = validate(a.into(), b.into())?;
        Ok(a * b)
    }

    /// Returns the true (non-truncating) quotient `a / b`.
    ///
    /// The range check runs before the zero check, so an out-of-range
    /// numerator over a zero denominator reports
    /// [`CalcError::RangeViolation`].
    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<f64> {
        let (a, b) = validate(a.into(), b.into())?;
        if b.is_zero() {
            return Err(CalcError::DivisionByZero);
        }

        Ok(a.as_f64() / b.as_f64())
    }
}

/// Checks `a` before `b`, so the first out-of-range operand is the one reported.
fn validate(a: Number, b: Number) -> CalcResult<(Number, Number)> {
    check_range(a)?;
    check_range(b)?;
    Ok((a, b))
}

fn check_range(value: Number) -> CalcResult<()> {
    if value.is_within(MIN_VALUE, MAX_VALUE) {
        Ok(())
    } else {
        Err(CalcError::range_violation(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_bounds() {
        assert!(validate(Number::from(MIN_VALUE), Number::from(MAX_VALUE)).is_ok());
    }

    #[test]
    fn validate_reports_first_operand_first() {
        let err = validate(Number::from(2_000_000), Number::from(-3_000_000)).unwrap_err();
        assert_eq!(err, CalcError::range_violation(Number::from(2_000_000)));
    }

    #[test]
    fn validate_reports_second_operand() {
        let err = validate(Number::from(0), Number::from(-1_000_001)).unwrap_err();
        assert_eq!(
            err,
            CalcError::RangeViolation {
                value: Number::from(-1_000_001),
                min: -1_000_000,
                max: 1_000_000,
            }
        );
    }

    #[test]
    fn divide_checks_range_before_zero() {
        let calc = Calculator::new();
        assert!(matches!(
            calc.divide(1_000_001, 0),
            Err(CalcError::RangeViolation { .. })
        ));
        assert_eq!(calc.divide(1_000_000, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn divide_rejects_negative_zero() {
        assert_eq!(Calculator.divide(1, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn results_are_not_bounded() {
        let calc = Calculator::new();
        assert_eq!(calc.add(MAX_VALUE, MAX_VALUE).unwrap(), 2_000_000);
        assert_eq!(
            calc.multiply(MIN_VALUE, MAX_VALUE).unwrap(),
            -1_000_000_000_000_i64
        );
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            Calculator.add(f64::NAN, 1),
            Err(CalcError::RangeViolation { .. })
        ));
    }
}
