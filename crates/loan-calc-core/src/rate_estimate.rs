//! Advisory interest-rate estimation from borrower attributes.
//!
//! A fixed-rule table: base rate by loan purpose, adjusted for credit score
//! band, employment type and income band, clamped to the 1%–15% product
//! range. The breakpoints are literal constants with no underlying formula.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LoanCalcResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest rate any borrower is quoted.
const RATE_FLOOR: Decimal = dec!(1.0);

/// Highest rate any borrower is quoted.
const RATE_CEILING: Decimal = dec!(15.0);

/// Half-width of the quoted min/max band around the estimate.
const BAND_SPREAD: Decimal = dec!(0.5);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanPurpose {
    Mortgage,
    Personal,
    Auto,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Regular,
    Contract,
    Freelance,
    /// Business owner / self-employed.
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditGrade {
    Exceptional,
    Excellent,
    Good,
    Fair,
    Watch,
    Substandard,
    HighRisk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEstimateInput {
    /// Bureau credit score, 300–999.
    pub credit_score: u32,
    pub loan_purpose: LoanPurpose,
    /// Annual income in ten-thousands of currency units.
    pub annual_income: Money,
    pub employment: EmploymentType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateAdjustments {
    pub credit: Rate,
    pub employment: Rate,
    pub income: Rate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEstimateOutput {
    pub estimated_rate: Rate,
    pub min_rate: Rate,
    pub max_rate: Rate,
    pub credit_grade: CreditGrade,
    pub base_rate: Rate,
    pub adjustments: RateAdjustments,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate an advisory rate band from borrower attributes.
pub fn estimate_rate(
    input: &RateEstimateInput,
) -> LoanCalcResult<ComputationOutput<RateEstimateOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let base_rate = base_rate(input.loan_purpose);
    let (credit_adj, credit_grade) = credit_adjustment(input.credit_score);
    let employment_adj = employment_adjustment(input.employment);
    let income_adj = income_adjustment(input.annual_income);

    let estimated_rate = (base_rate + credit_adj + employment_adj + income_adj)
        .clamp(RATE_FLOOR, RATE_CEILING);
    let min_rate = (estimated_rate - BAND_SPREAD).max(RATE_FLOOR);
    let max_rate = (estimated_rate + BAND_SPREAD).min(RATE_CEILING);

    let output = RateEstimateOutput {
        estimated_rate,
        min_rate,
        max_rate,
        credit_grade,
        base_rate,
        adjustments: RateAdjustments {
            credit: credit_adj,
            employment: employment_adj,
            income: income_adj,
        },
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "rate_floor": RATE_FLOOR.to_string(),
        "rate_ceiling": RATE_CEILING.to_string(),
        "band_spread": BAND_SPREAD.to_string(),
    });

    Ok(with_metadata(
        "Rate Estimation (fixed-rule adjustment table)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

fn base_rate(purpose: LoanPurpose) -> Rate {
    match purpose {
        LoanPurpose::Mortgage => dec!(3.5),
        LoanPurpose::Personal => dec!(6.5),
        LoanPurpose::Auto => dec!(4.5),
        LoanPurpose::Business => dec!(5.5),
    }
}

fn credit_adjustment(score: u32) -> (Rate, CreditGrade) {
    match score {
        900.. => (dec!(-2.0), CreditGrade::Exceptional),
        850.. => (dec!(-1.5), CreditGrade::Excellent),
        750.. => (dec!(-1.0), CreditGrade::Good),
        650.. => (dec!(-0.5), CreditGrade::Fair),
        550.. => (dec!(0.5), CreditGrade::Watch),
        450.. => (dec!(1.5), CreditGrade::Substandard),
        _ => (dec!(3.0), CreditGrade::HighRisk),
    }
}

fn employment_adjustment(employment: EmploymentType) -> Rate {
    match employment {
        EmploymentType::Regular => Decimal::ZERO,
        EmploymentType::Contract => dec!(0.3),
        EmploymentType::Freelance => dec!(0.8),
        EmploymentType::Business => dec!(0.5),
    }
}

fn income_adjustment(annual_income: Money) -> Rate {
    if annual_income >= dec!(10_000) {
        dec!(-0.3)
    } else if annual_income >= dec!(7_000) {
        dec!(-0.2)
    } else if annual_income >= dec!(5_000) {
        dec!(-0.1)
    } else if annual_income < dec!(3_000) {
        dec!(0.2)
    } else {
        Decimal::ZERO
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &RateEstimateInput) -> LoanCalcResult<()> {
    if !(300..=999).contains(&input.credit_score) {
        return Err(LoanCalcError::InvalidInput {
            field: "credit_score".into(),
            reason: "Credit score must be between 300 and 999.".into(),
        });
    }
    if input.annual_income <= Decimal::ZERO {
        return Err(LoanCalcError::InvalidInput {
            field: "annual_income".into(),
            reason: "Annual income must be positive.".into(),
        });
    }
    Ok(())
}
