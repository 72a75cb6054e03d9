use std::fmt;

use anyhow::Context;
use boundcalc::prelude::*;
use clap::ValueEnum;
use log::debug;
use serde::Serialize;

use crate::utils::terminal::print_evaluation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `5 + 3 = 8`
    Text,
    /// `{"operation":"add","lhs":5,"rhs":3,"result":8}`
    Json,
}

pub struct EvalOptions {
    pub operation: Operation,
    pub lhs: Number,
    pub rhs: Number,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub lhs: Number,
    pub rhs: Number,
    pub result: Number,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.result
        )
    }
}

pub fn evaluate(opts: &EvalOptions) -> CalcResult<Evaluation> {
    let result = opts
        .operation
        .apply(&Calculator::new(), opts.lhs, opts.rhs)?;

    Ok(Evaluation {
        operation: opts.operation,
        lhs: opts.lhs,
        rhs: opts.rhs,
        result,
    })
}

pub fn perform(opts: EvalOptions) -> anyhow::Result<()> {
    debug!(
        "Evaluating `{}` with operands {} and {}",
        opts.operation, opts.lhs, opts.rhs
    );

    let evaluation = evaluate(&opts)?;
    debug!("Result: {:?}", evaluation.result);

    if !evaluation.result.as_f64().is_finite() {
        anyhow::bail!("Result of `{}` is not a finite number", evaluation);
    }

    match opts.format {
        OutputFormat::Text => print_evaluation(&evaluation),
        OutputFormat::Json => {
            let json =
                serde_json::to_string(&evaluation).context("Failed to serialize the evaluation")?;
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(operation: Operation, lhs: impl Into<Number>, rhs: impl Into<Number>) -> EvalOptions {
        EvalOptions {
            operation,
            lhs: lhs.into(),
            rhs: rhs.into(),
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn text_output() {
        let evaluation = evaluate(&opts(Operation::Add, 5, 3)).unwrap();
        insta::assert_snapshot!(evaluation, @"5 + 3 = 8");

        let evaluation = evaluate(&opts(Operation::Divide, 7, -2)).unwrap();
        insta::assert_snapshot!(evaluation, @"7 / -2 = -3.5");

        let evaluation = evaluate(&opts(Operation::Divide, 10, 2)).unwrap();
        insta::assert_snapshot!(evaluation, @"10 / 2 = 5.0");
    }

    #[test]
    fn json_output() {
        let evaluation = evaluate(&opts(Operation::Add, 5, 3)).unwrap();
        insta::assert_snapshot!(
            serde_json::to_string(&evaluation).unwrap(),
            @r#"{"operation":"add","lhs":5,"rhs":3,"result":8}"#
        );

        let evaluation = evaluate(&opts(Operation::Divide, 10, 2)).unwrap();
        insta::assert_snapshot!(
            serde_json::to_string(&evaluation).unwrap(),
            @r#"{"operation":"divide","lhs":10,"rhs":2,"result":5.0}"#
        );
    }

    #[test]
    fn errors_are_passed_through() {
        let err = evaluate(&opts(Operation::Divide, 5, 0)).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);

        let err = perform(opts(Operation::Multiply, 1_000_001, 0)).unwrap_err();
        insta::assert_snapshot!(err, @"Input 1000001 is outside valid range [-1000000, 1000000]");
    }

    #[test]
    fn infinite_result_is_an_error() {
        let mut json = opts(Operation::Divide, 1_000_000, 5e-324);
        json.format = OutputFormat::Json;

        let err = perform(json).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Result of `1000000 / 0.000"));
        assert!(message.ends_with("= inf` is not a finite number"));
    }

    #[test]
    fn text_output_is_printed() {
        assert!(perform(opts(Operation::Multiply, 6, 7)).is_ok());
    }
}
