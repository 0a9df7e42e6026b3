//! Maturity (bullet) repayment: interest-only periods, with the entire
//! principal retired alongside the final period's interest.

use rust_decimal::Decimal;

use super::schedule::{ConventionSummary, ScheduleBuilder, ScheduleOutput};
use crate::types::Money;

pub(crate) fn build(principal: Money, monthly_rate: Decimal, term_months: u32) -> ScheduleOutput {
    let monthly_interest = principal * monthly_rate;

    let mut builder = ScheduleBuilder::new(principal, term_months);
    for _ in 1..term_months {
        builder.post(monthly_interest, Decimal::ZERO, monthly_interest);
    }
    builder.close(monthly_interest);

    let final_payment = builder
        .rows()
        .last()
        .map(|row| row.payment)
        .unwrap_or_default();

    builder.finish(ConventionSummary::MaturityPayment {
        monthly_interest,
        final_payment,
    })
}
