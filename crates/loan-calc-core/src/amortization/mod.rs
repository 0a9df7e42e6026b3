//! Month-by-month repayment schedules under the four supported repayment
//! conventions. All math in `rust_decimal::Decimal`; the engine keeps full
//! precision and leaves display rounding to the caller.

pub mod equal_payment;
pub mod equal_principal;
pub mod maturity;
pub mod schedule;
pub mod step_up;

use std::time::Instant;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LoanCalcResult;

pub use schedule::{ConventionSummary, ScheduleOutput, ScheduleRow};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// The four repayment conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepaymentConvention {
    /// Level annuity: constant cash payment.
    EqualPayment,
    /// Constant principal component, declining cash payment.
    EqualPrincipal,
    /// Interest-only with a bullet at maturity.
    MaturityPayment,
    /// Flat payment per 12-month block, stepped up annually.
    StepUpPayment,
}

/// A fully resolved calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Loan principal in whole currency units.
    pub principal: Money,
    /// Annual interest rate in percent (5.0 = 5%).
    pub annual_rate: Rate,
    /// Total number of monthly periods.
    pub term_months: u32,
    pub convention: RepaymentConvention,
    /// Annual payment growth in percent; step-up schedules only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_rate: Option<Rate>,
}

/// Wire-format request as sent by front-end collaborators: the term arrives
/// split into years and months.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub principal: Money,
    pub annual_rate: Rate,
    #[serde(default)]
    pub years: u32,
    #[serde(default)]
    pub months: u32,
    pub payment_type: RepaymentConvention,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_rate: Option<Rate>,
}

impl ScheduleRequest {
    /// Fold the split term into months. The fold runs in `u64` so an
    /// oversized `years` surfaces as `InvalidInput` instead of wrapping.
    pub fn into_loan_request(self) -> LoanCalcResult<LoanRequest> {
        let total = u64::from(self.years) * 12 + u64::from(self.months);
        let term_months = u32::try_from(total).map_err(|_| LoanCalcError::InvalidInput {
            field: "years".into(),
            reason: "Term exceeds the supported number of months.".into(),
        })?;
        Ok(LoanRequest {
            principal: self.principal,
            annual_rate: self.annual_rate,
            term_months,
            convention: self.payment_type,
            step_rate: self.step_rate,
        })
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the full repayment schedule for a request.
///
/// Deterministic and side-effect free: identical requests produce identical
/// outputs. Fails fast with `InvalidInput` before any simulation work.
pub fn build_schedule(
    request: &LoanRequest,
) -> LoanCalcResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_request(request)?;

    if request.convention != RepaymentConvention::StepUpPayment && request.step_rate.is_some() {
        warnings.push("step_rate is ignored outside step-up schedules".into());
    }

    let monthly_rate = request.annual_rate / dec!(100) / dec!(12);

    let result = match request.convention {
        RepaymentConvention::EqualPayment => {
            equal_payment::build(request.principal, monthly_rate, request.term_months)
        }
        RepaymentConvention::EqualPrincipal => {
            equal_principal::build(request.principal, monthly_rate, request.term_months)
        }
        RepaymentConvention::MaturityPayment => {
            maturity::build(request.principal, monthly_rate, request.term_months)
        }
        RepaymentConvention::StepUpPayment => step_up::build(
            request.principal,
            monthly_rate,
            request.step_rate.unwrap_or_default(),
            request.term_months,
        )?,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "convention": request.convention,
        "monthly_rate": monthly_rate.to_string(),
        "term_months": request.term_months,
        "step_rate": request.step_rate.map(|s| s.to_string()),
    });

    Ok(with_metadata(
        methodology(request.convention),
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

fn methodology(convention: RepaymentConvention) -> &'static str {
    match convention {
        RepaymentConvention::EqualPayment => "Amortization Schedule (level annuity)",
        RepaymentConvention::EqualPrincipal => "Amortization Schedule (equal principal)",
        RepaymentConvention::MaturityPayment => "Amortization Schedule (interest-only bullet)",
        RepaymentConvention::StepUpPayment => {
            "Amortization Schedule (annual step-up, bisection-solved initial payment)"
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_request(request: &LoanRequest) -> LoanCalcResult<()> {
    if request.principal <= Decimal::ZERO {
        return Err(LoanCalcError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive.".into(),
        });
    }
    if request.annual_rate < Decimal::ZERO {
        return Err(LoanCalcError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Annual rate cannot be negative.".into(),
        });
    }
    if request.term_months == 0 {
        return Err(LoanCalcError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least one month.".into(),
        });
    }
    if request.convention == RepaymentConvention::StepUpPayment {
        match request.step_rate {
            Some(step) if step > Decimal::ZERO => {}
            Some(_) => {
                return Err(LoanCalcError::InvalidInput {
                    field: "step_rate".into(),
                    reason: "Step rate must be positive.".into(),
                });
            }
            None => {
                return Err(LoanCalcError::InvalidInput {
                    field: "step_rate".into(),
                    reason: "Step rate is required for step-up schedules.".into(),
                });
            }
        }
    }
    Ok(())
}
