mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculate::CalculateArgs;
use commands::compare::CompareArgs;
use commands::scenarios::{PrepaymentArgs, RateChangeArgs};

/// Loan amortisation and scenario simulation
#[derive(Parser)]
#[command(
    name = "ccalc",
    version,
    about = "Loan amortisation and scenario simulation",
    long_about = "Prices loans under annuity and linear amortisation with decimal \
                  precision. Supports prepayment and rate-change scenarios and \
                  side-by-side comparison of up to three offers."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a repayment schedule and summary for a single loan
    Calculate(CalculateArgs),
    /// Recompute a loan under a partial or full prepayment
    Prepayment(PrepaymentArgs),
    /// Recompute a loan under an interest rate change
    RateChange(RateChangeArgs),
    /// Compare 2-3 loans by total cost
    Compare(CompareArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::calculate::run_calculate(args),
        Commands::Prepayment(args) => commands::scenarios::run_prepayment(args),
        Commands::RateChange(args) => commands::scenarios::run_rate_change(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Version => {
            println!("ccalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
