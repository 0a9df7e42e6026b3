//! Schedule rows, output envelope and the shared period accumulator used by
//! all four repayment conventions.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One repayment period. Field names follow the engine's vocabulary; the
/// serde renames keep the wire format the front end already consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Period number, 1-based.
    #[serde(rename = "month")]
    pub period: u32,
    /// Total cash paid this period.
    pub payment: Money,
    /// Portion of the payment reducing the balance.
    #[serde(rename = "principal")]
    pub principal_component: Money,
    /// Portion of the payment covering accrued interest.
    #[serde(rename = "interest")]
    pub interest_component: Money,
    /// Outstanding principal after this period.
    #[serde(rename = "balance")]
    pub balance_after: Money,
}

/// Convention-specific summary figures, flattened into the response so the
/// wire format carries e.g. `monthly_payment` at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConventionSummary {
    EqualPayment {
        monthly_payment: Money,
    },
    EqualPrincipal {
        first_payment: Money,
        last_payment: Money,
    },
    MaturityPayment {
        monthly_interest: Money,
        final_payment: Money,
    },
    StepUpPayment {
        initial_payment: Money,
        final_payment: Money,
        step_rate: Rate,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub schedule: Vec<ScheduleRow>,
    pub total_payment: Money,
    pub total_interest: Money,
    #[serde(flatten)]
    pub summary: ConventionSummary,
}

impl ScheduleOutput {
    /// Copy with every currency value rounded to the nearest whole unit.
    /// Display-side convenience; the engine itself keeps full precision.
    pub fn rounded_to_unit(&self) -> ScheduleOutput {
        ScheduleOutput {
            schedule: self
                .schedule
                .iter()
                .map(|row| ScheduleRow {
                    period: row.period,
                    payment: round_unit(row.payment),
                    principal_component: round_unit(row.principal_component),
                    interest_component: round_unit(row.interest_component),
                    balance_after: round_unit(row.balance_after),
                })
                .collect(),
            total_payment: round_unit(self.total_payment),
            total_interest: round_unit(self.total_interest),
            summary: match self.summary {
                ConventionSummary::EqualPayment { monthly_payment } => {
                    ConventionSummary::EqualPayment {
                        monthly_payment: round_unit(monthly_payment),
                    }
                }
                ConventionSummary::EqualPrincipal {
                    first_payment,
                    last_payment,
                } => ConventionSummary::EqualPrincipal {
                    first_payment: round_unit(first_payment),
                    last_payment: round_unit(last_payment),
                },
                ConventionSummary::MaturityPayment {
                    monthly_interest,
                    final_payment,
                } => ConventionSummary::MaturityPayment {
                    monthly_interest: round_unit(monthly_interest),
                    final_payment: round_unit(final_payment),
                },
                ConventionSummary::StepUpPayment {
                    initial_payment,
                    final_payment,
                    step_rate,
                } => ConventionSummary::StepUpPayment {
                    initial_payment: round_unit(initial_payment),
                    final_payment: round_unit(final_payment),
                    step_rate,
                },
            },
        }
    }
}

/// Round a currency amount to the nearest whole unit, half away from zero.
pub fn round_unit(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Period accumulator
// ---------------------------------------------------------------------------

/// Accumulates periods against a declining balance. Conventions decide the
/// payment split; the builder owns the balance recurrence and the totals.
pub(crate) struct ScheduleBuilder {
    rows: Vec<ScheduleRow>,
    balance: Money,
    period: u32,
    total_payment: Money,
    total_interest: Money,
}

impl ScheduleBuilder {
    pub fn new(principal: Money, term_months: u32) -> Self {
        ScheduleBuilder {
            rows: Vec::with_capacity(term_months as usize),
            balance: principal,
            period: 0,
            total_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
        }
    }

    /// Outstanding principal before the next period is posted.
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Post one period given the total payment; the principal component is
    /// whatever the payment leaves after interest.
    pub fn post_payment(&mut self, payment: Money, interest: Money) {
        self.post(payment, payment - interest, interest);
    }

    /// Post one period from explicit components.
    pub fn post(&mut self, payment: Money, principal: Money, interest: Money) {
        self.period += 1;
        self.balance -= principal;
        self.total_payment += payment;
        self.total_interest += interest;
        self.rows.push(ScheduleRow {
            period: self.period,
            payment,
            principal_component: principal,
            interest_component: interest,
            balance_after: self.balance,
        });
    }

    /// Post the final period, retiring the remaining balance exactly so the
    /// closing balance is zero regardless of accumulated drift.
    pub fn close(&mut self, interest: Money) {
        let principal = self.balance;
        self.post(principal + interest, principal, interest);
    }

    pub fn finish(self, summary: ConventionSummary) -> ScheduleOutput {
        ScheduleOutput {
            schedule: self.rows,
            total_payment: self.total_payment,
            total_interest: self.total_interest,
            summary,
        }
    }
}
