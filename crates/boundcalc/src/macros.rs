/// Implements `From<$t> for Number` for each listed primitive, widening
/// losslessly into the given variant's representation.
macro_rules! impl_from_primitive {
    ($variant:ident($repr:ty): $($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for $crate::types::Number {
                fn from(value: $t) -> Self {
                    $crate::types::Number::$variant(<$repr>::from(value))
                }
            }
        )+
    };
}

/// Implements `From<$t> for Number` for integers wider than `i64`, falling
/// back to `Number::Float` when the value does not fit.
macro_rules! impl_from_wide_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for $crate::types::Number {
                fn from(value: $t) -> Self {
                    i64::try_from(value)
                        .map($crate::types::Number::Int)
                        .unwrap_or($crate::types::Number::Float(value as f64))
                }
            }
        )+
    };
}

/// Implements a binary arithmetic operator for `Number`.
///
/// Two integers stay integral unless the checked operation overflows `i64`,
/// in which case the result is computed in floating point. Any float operand
/// promotes the whole operation to `f64`.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl std::ops::$trait for $crate::types::Number {
            type Output = $crate::types::Number;

            fn $method(self, rhs: Self) -> Self::Output {
                use $crate::types::Number::{Float, Int};

                match (self, rhs) {
                    (Int(a), Int(b)) => a
                        .$checked(b)
                        .map(Int)
                        .unwrap_or_else(|| Float(a as f64 $op b as f64)),
                    (a, b) => Float(a.as_f64() $op b.as_f64()),
                }
            }
        }
    };
}
