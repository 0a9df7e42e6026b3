use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use loan_calc_core::amortization::{self, RepaymentConvention, ScheduleRequest};

use crate::input;

/// Arguments for schedule calculation
#[derive(Args)]
pub struct ScheduleArgs {
    /// Loan principal in whole currency units
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 5.0 for 5%)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Term, years component
    #[arg(long, default_value = "0")]
    pub years: u32,

    /// Term, months component
    #[arg(long, default_value = "0")]
    pub months: u32,

    /// Repayment convention
    #[arg(long, value_enum)]
    pub payment_type: Option<ConventionArg>,

    /// Annual payment growth in percent (step-up only)
    #[arg(long)]
    pub step_rate: Option<Decimal>,

    /// Keep full decimal precision instead of rounding to whole units
    #[arg(long)]
    pub exact: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConventionArg {
    EqualPayment,
    EqualPrincipal,
    MaturityPayment,
    StepUpPayment,
}

impl From<ConventionArg> for RepaymentConvention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::EqualPayment => RepaymentConvention::EqualPayment,
            ConventionArg::EqualPrincipal => RepaymentConvention::EqualPrincipal,
            ConventionArg::MaturityPayment => RepaymentConvention::MaturityPayment,
            ConventionArg::StepUpPayment => RepaymentConvention::StepUpPayment,
        }
    }
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let wire: ScheduleRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ScheduleRequest {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            years: args.years,
            months: args.months,
            payment_type: args
                .payment_type
                .ok_or("--payment-type is required (or provide --input)")?
                .into(),
            step_rate: args.step_rate,
        }
    };
    let request = wire.into_loan_request()?;

    let mut result = amortization::build_schedule(&request)?;
    if !args.exact {
        result.result = result.result.rounded_to_unit();
    }
    Ok(serde_json::to_value(result)?)
}
