use std::process;

use boundcalc::prelude::{Number, Operation};
use boundcalc_cli::{
    commands::{
        eval::{self, EvalOptions, OutputFormat},
        ops,
    },
    logger,
};
use clap::{Args, Parser, Subcommand};
use log::{debug, error, LevelFilter};

#[derive(Parser)]
#[command(name = "boundcalc", version, about = "Bounded four-operation calculator")]
struct Cli {
    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add two numbers
    #[command(allow_negative_numbers = true)]
    Add(OperandArgs),
    /// Subtract the second number from the first
    #[command(allow_negative_numbers = true)]
    Subtract(OperandArgs),
    /// Multiply two numbers
    #[command(allow_negative_numbers = true)]
    Multiply(OperandArgs),
    /// Divide the first number by the second
    #[command(allow_negative_numbers = true)]
    Divide(OperandArgs),
    /// List the operations and the valid operand range
    Ops,
}

#[derive(Args)]
struct OperandArgs {
    /// First operand
    a: Number,

    /// Second operand
    b: Number,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl OperandArgs {
    fn into_options(self, operation: Operation) -> EvalOptions {
        EvalOptions {
            operation,
            lhs: self.a,
            rhs: self.b,
            format: self.format,
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Add(args) => eval::perform(args.into_options(Operation::Add)),
        Command::Subtract(args) => eval::perform(args.into_options(Operation::Subtract)),
        Command::Multiply(args) => eval::perform(args.into_options(Operation::Multiply)),
        Command::Divide(args) => eval::perform(args.into_options(Operation::Divide)),
        Command::Ops => ops::perform(),
    }
}

fn main() {
    let cli = Cli::parse();

    logger::init(cli.verbose.then_some(LevelFilter::Debug));
    debug!("Setup with verbose: {}", cli.verbose);

    if let Err(e) = run(cli.command) {
        error!("Error: {}", e);
        debug!("Error: {:?}", e);
        process::exit(1);
    }
}
