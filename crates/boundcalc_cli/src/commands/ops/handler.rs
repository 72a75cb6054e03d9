use boundcalc::prelude::*;
use owo_colors::OwoColorize;

pub fn perform() -> anyhow::Result<()> {
    println!("{}", "Operations".bold().dimmed());
    for op in Operation::ALL {
        println!("  {:<10} {}", op.name(), op.symbol().dimmed());
    }

    println!("\n{}", "Operand range".bold().dimmed());
    println!(
        "  [{}, {}] {}",
        MIN_VALUE,
        MAX_VALUE,
        "(inclusive)".dimmed()
    );

    Ok(())
}
