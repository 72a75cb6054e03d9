use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    calculator::Calculator,
    error::{CalcResult, ParseOperationError},
    types::Number,
};

/// One of the four calculator operations, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Runs the matching [`Calculator`] method. A quotient is returned as
    /// `Number::Float`.
    pub fn apply(
        &self,
        calc: &Calculator,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> CalcResult<Number> {
        match self {
            Operation::Add => calc.add(a, b),
            Operation::Subtract => calc.subtract(a, b),
            Operation::Multiply => calc.multiply(a, b),
            Operation::Divide => calc.divide(a, b).map(Number::Float),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Operation::Add,
            "subtract" | "sub" | "-" => Operation::Subtract,
            "multiply" | "mul" | "*" => Operation::Multiply,
            "divide" | "div" | "/" => Operation::Divide,
            _ => return Err(ParseOperationError(s.to_string())),
        })
    }
}
