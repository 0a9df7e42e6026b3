//! Step-up repayment: payments are flat within consecutive 12-month blocks
//! and grow by a fixed annual factor at each block boundary.
//!
//! The initial payment has no closed form — each block's payment depends on
//! the balance evolution under all prior blocks — so it is found by
//! bisection on the residual balance left after simulating the full term.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::equal_payment;
use super::schedule::{ConventionSummary, ScheduleBuilder, ScheduleOutput};
use crate::error::LoanCalcError;
use crate::solve;
use crate::types::{Money, Rate};
use crate::LoanCalcResult;

/// Periods per payment block; payments step up once a year.
const MONTHS_PER_BLOCK: u32 = 12;

/// Absolute bisection tolerance, a fraction of one currency unit.
const BISECTION_TOL: Decimal = dec!(0.01);

/// Maximum bisection iterations.
const BISECTION_MAX_ITER: u32 = 200;

/// Maximum doublings when expanding the upper bracket.
const MAX_BRACKET_DOUBLINGS: u32 = 100;

/// Payment in force for a given 1-based period.
fn block_payment(initial_payment: Money, step_factor: Decimal, period: u32) -> Money {
    let block = (period - 1) / MONTHS_PER_BLOCK;
    initial_payment * step_factor.powu(u64::from(block))
}

/// Balance remaining after simulating the full term with a candidate initial
/// payment. Principal components clamp at zero when the candidate cannot
/// cover accrued interest, which keeps the residual finite and monotonically
/// decreasing in the candidate.
pub(crate) fn final_balance(
    principal: Money,
    monthly_rate: Decimal,
    step_factor: Decimal,
    term_months: u32,
    initial_payment: Money,
) -> Money {
    let mut balance = principal;
    for period in 1..=term_months {
        let interest = balance * monthly_rate;
        let payment = block_payment(initial_payment, step_factor, period);
        let principal_component = (payment - interest).max(Decimal::ZERO);
        balance -= principal_component;
    }
    balance
}

pub(crate) fn build(
    principal: Money,
    monthly_rate: Decimal,
    step_rate: Rate,
    term_months: u32,
) -> LoanCalcResult<ScheduleOutput> {
    let step_factor = Decimal::ONE + step_rate / dec!(100);

    // Interest-only payment leaves the principal untouched: a firm lower
    // bound. The level annuity payment retires the loan without any step-up,
    // so it is the natural upper bracket; double it if ever insufficient.
    let lo = principal * monthly_rate;
    let mut hi = equal_payment::level_payment(principal, monthly_rate, term_months);
    let mut doublings = 0;
    while final_balance(principal, monthly_rate, step_factor, term_months, hi) > Decimal::ZERO {
        hi *= dec!(2);
        doublings += 1;
        if doublings > MAX_BRACKET_DOUBLINGS {
            return Err(LoanCalcError::ConvergenceFailure {
                function: "step_up_bracket".into(),
                iterations: doublings,
                last_delta: final_balance(principal, monthly_rate, step_factor, term_months, hi),
            });
        }
    }

    let initial_payment = solve::bisect_decreasing(
        |candidate| final_balance(principal, monthly_rate, step_factor, term_months, candidate),
        lo,
        hi,
        BISECTION_TOL,
        BISECTION_MAX_ITER,
        "step_up_initial_payment",
    )?;

    let mut builder = ScheduleBuilder::new(principal, term_months);
    for period in 1..term_months {
        let payment = block_payment(initial_payment, step_factor, period);
        let interest = builder.balance() * monthly_rate;
        builder.post_payment(payment, interest);
    }
    // Final period absorbs the residual the search leaves behind.
    let interest = builder.balance() * monthly_rate;
    builder.close(interest);

    let final_payment = builder
        .rows()
        .last()
        .map(|row| row.payment)
        .unwrap_or_default();

    Ok(builder.finish(ConventionSummary::StepUpPayment {
        initial_payment,
        final_payment,
        step_rate,
    }))
}
