use owo_colors::OwoColorize;

use crate::commands::eval::Evaluation;

pub fn print_evaluation(evaluation: &Evaluation) {
    println!(
        "{} {} {} {} {}",
        evaluation.lhs,
        evaluation.operation.symbol().dimmed(),
        evaluation.rhs,
        "=".dimmed(),
        evaluation.result.bold()
    );
}
