use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use loan_calc_core::rate_estimate::{self, EmploymentType, LoanPurpose, RateEstimateInput};

use crate::input;

/// Arguments for rate estimation
#[derive(Args)]
pub struct RateArgs {
    /// Bureau credit score (300–999)
    #[arg(long)]
    pub credit_score: Option<u32>,

    /// Loan purpose
    #[arg(long, value_enum)]
    pub loan_purpose: Option<PurposeArg>,

    /// Annual income in ten-thousands of currency units
    #[arg(long)]
    pub annual_income: Option<Decimal>,

    /// Employment type
    #[arg(long, value_enum, default_value = "regular")]
    pub employment: EmploymentArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PurposeArg {
    Mortgage,
    Personal,
    Auto,
    Business,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EmploymentArg {
    Regular,
    Contract,
    Freelance,
    Business,
}

impl From<PurposeArg> for LoanPurpose {
    fn from(arg: PurposeArg) -> Self {
        match arg {
            PurposeArg::Mortgage => LoanPurpose::Mortgage,
            PurposeArg::Personal => LoanPurpose::Personal,
            PurposeArg::Auto => LoanPurpose::Auto,
            PurposeArg::Business => LoanPurpose::Business,
        }
    }
}

impl From<EmploymentArg> for EmploymentType {
    fn from(arg: EmploymentArg) -> Self {
        match arg {
            EmploymentArg::Regular => EmploymentType::Regular,
            EmploymentArg::Contract => EmploymentType::Contract,
            EmploymentArg::Freelance => EmploymentType::Freelance,
            EmploymentArg::Business => EmploymentType::Business,
        }
    }
}

pub fn run_estimate_rate(args: RateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rate_input: RateEstimateInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RateEstimateInput {
            credit_score: args
                .credit_score
                .ok_or("--credit-score is required (or provide --input)")?,
            loan_purpose: args
                .loan_purpose
                .ok_or("--loan-purpose is required (or provide --input)")?
                .into(),
            annual_income: args
                .annual_income
                .ok_or("--annual-income is required (or provide --input)")?,
            employment: args.employment.into(),
        }
    };

    let result = rate_estimate::estimate_rate(&rate_input)?;
    Ok(serde_json::to_value(result)?)
}
