mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::rate::RateArgs;
use commands::schedule::ScheduleArgs;

/// Loan repayment schedule calculations
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Loan repayment schedule calculations",
    long_about = "A CLI for building month-by-month loan repayment schedules with decimal \
                  precision. Supports equal-payment, equal-principal, maturity (bullet) and \
                  annual step-up repayment, plus an advisory borrower rate estimate."
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
    /// Build a repayment schedule for a loan
    Schedule(ScheduleArgs),
    /// Estimate an advisory interest rate from borrower attributes
    EstimateRate(RateArgs),
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
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::EstimateRate(args) => commands::rate::run_estimate_rate(args),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
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
