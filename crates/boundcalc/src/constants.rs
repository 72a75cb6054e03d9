pub mod range {
    /// Smallest operand accepted by every operation (inclusive).
    pub const MIN_VALUE: i64 = -1_000_000;
    /// Largest operand accepted by every operation (inclusive).
    pub const MAX_VALUE: i64 = 1_000_000;
}

pub mod message {
    pub const DIVISION_BY_ZERO: &str = "Cannot divide by zero";
}
