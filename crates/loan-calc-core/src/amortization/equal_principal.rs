//! Equal-principal repayment: a constant principal component each period,
//! so the cash payment shrinks as interest accrues on a falling balance.

use rust_decimal::Decimal;

use super::schedule::{ConventionSummary, ScheduleBuilder, ScheduleOutput};
use crate::types::Money;

pub(crate) fn build(principal: Money, monthly_rate: Decimal, term_months: u32) -> ScheduleOutput {
    let principal_component = principal / Decimal::from(term_months);

    let mut builder = ScheduleBuilder::new(principal, term_months);
    for _ in 1..term_months {
        let interest = builder.balance() * monthly_rate;
        builder.post(principal_component + interest, principal_component, interest);
    }
    // Last period takes the exact remainder of the balance.
    let interest = builder.balance() * monthly_rate;
    builder.close(interest);

    let first_payment = builder
        .rows()
        .first()
        .map(|row| row.payment)
        .unwrap_or_default();
    let last_payment = builder
        .rows()
        .last()
        .map(|row| row.payment)
        .unwrap_or_default();

    builder.finish(ConventionSummary::EqualPrincipal {
        first_payment,
        last_payment,
    })
}
