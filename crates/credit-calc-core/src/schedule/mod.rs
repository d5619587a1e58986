//! Repayment schedule generation.
//!
//! Two amortisation methods are supported: annuity (constant total payment)
//! and linear (constant principal share). Generation is all-or-nothing; input
//! is validated before the first entry is built. Scenario overlays reuse the
//! same per-method builders, so baseline and scenario schedules stay
//! numerically comparable month by month.

pub mod annuity;
pub mod linear;

use chrono::{Months, NaiveDate};

use crate::error::CreditCalcError;
use crate::types::{CreditInput, Money, PaymentMethod, Rate, Schedule};
use crate::CreditCalcResult;

/// Generate the full repayment schedule for a loan.
pub fn generate(input: &CreditInput) -> CreditCalcResult<Schedule> {
    input.validate()?;
    build(
        input.payment_type,
        input.amount,
        input.monthly_rate(),
        input.term_months,
        input.start_date,
        0,
    )
}

/// Build `term_months` entries amortising `principal`, numbering them from
/// `month_offset + 1`. Payment dates stay anchored to the original loan start
/// date so regenerated overlay tails line up with the baseline.
pub(crate) fn build(
    method: PaymentMethod,
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
    start_date: NaiveDate,
    month_offset: u32,
) -> CreditCalcResult<Schedule> {
    match method {
        PaymentMethod::Annuity => {
            annuity::build(principal, monthly_rate, term_months, start_date, month_offset)
        }
        PaymentMethod::Linear => {
            linear::build(principal, monthly_rate, term_months, start_date, month_offset)
        }
    }
}

/// Payment date for a 1-based month number: the start date advanced by that
/// many whole calendar months, clamped at month end (Jan 31 + 1 = Feb 29).
pub(crate) fn payment_date(start_date: NaiveDate, month: u32) -> CreditCalcResult<NaiveDate> {
    start_date
        .checked_add_months(Months::new(month))
        .ok_or_else(|| {
            CreditCalcError::DateError(format!(
                "Payment date out of calendar range: {start_date} + {month} months"
            ))
        })
}
