//! Level-annuity repayment: the same cash payment every period, with the
//! principal/interest split shifting as the balance declines.

use rust_decimal::{Decimal, MathematicalOps};

use super::schedule::{ConventionSummary, ScheduleBuilder, ScheduleOutput};
use crate::types::Money;

/// Closed-form level payment that amortizes `principal` over `term_months`
/// at the given period rate: `P * r / (1 - (1+r)^-n)`. Zero-rate loans
/// divide the principal evenly.
pub(crate) fn level_payment(principal: Money, monthly_rate: Decimal, term_months: u32) -> Money {
    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }
    let factor = (Decimal::ONE + monthly_rate).powu(u64::from(term_months));
    principal * monthly_rate * factor / (factor - Decimal::ONE)
}

pub(crate) fn build(principal: Money, monthly_rate: Decimal, term_months: u32) -> ScheduleOutput {
    let payment = level_payment(principal, monthly_rate, term_months);

    let mut builder = ScheduleBuilder::new(principal, term_months);
    for _ in 1..term_months {
        let interest = builder.balance() * monthly_rate;
        builder.post_payment(payment, interest);
    }
    // Final period retires the exact remaining balance, absorbing the
    // floating drift the closed form leaves behind.
    let interest = builder.balance() * monthly_rate;
    builder.close(interest);

    builder.finish(ConventionSummary::EqualPayment {
        monthly_payment: payment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_level_payment_matches_annuity_formula() {
        // 12,000,000 at 6% annual over 12 months, r = 0.005
        let r = dec!(0.005);
        let payment = level_payment(dec!(12_000_000), r, 12);
        let factor = (Decimal::ONE + r).powu(12);
        let expected = dec!(12_000_000) * r * factor / (factor - Decimal::ONE);
        assert_eq!(payment, expected);
        // Sanity: a touch above the zero-interest 1,000,000 installment
        assert!(payment > dec!(1_030_000) && payment < dec!(1_035_000));
    }

    #[test]
    fn test_level_payment_zero_rate() {
        assert_eq!(level_payment(dec!(1200), Decimal::ZERO, 12), dec!(100));
    }

    #[test]
    fn test_single_period_loan() {
        let out = build(dec!(1_000_000), dec!(0.005), 1);
        assert_eq!(out.schedule.len(), 1);
        let row = &out.schedule[0];
        assert_eq!(row.principal_component, dec!(1_000_000));
        assert_eq!(row.interest_component, dec!(5_000));
        assert_eq!(row.payment, dec!(1_005_000));
        assert_eq!(row.balance_after, Decimal::ZERO);
    }
}
