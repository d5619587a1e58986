use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CreditCalcError;
use crate::schedule;
use crate::types::{CreditInput, Money, Schedule};
use crate::CreditCalcResult;

/// Kind of out-of-schedule payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrepaymentKind {
    /// Reduces the outstanding balance; the loan runs to its original term
    Partial,
    /// Clears the outstanding balance; the schedule terminates at that month
    Full,
}

/// An out-of-schedule payment applied after a given month's regular payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prepayment {
    pub amount: Money,
    pub month: u32,
    #[serde(rename = "type")]
    pub kind: PrepaymentKind,
}

/// Recompute a schedule under a prepayment event.
///
/// The baseline is never mutated. The prepaid cash flows through the event
/// month's entry (so payment still equals principal plus interest and the
/// principal column still sums to the amount actually repaid), and the months
/// after it are regenerated with the same method and rate from the reduced
/// balance. The payoff date stays fixed; a partial prepayment lowers the
/// remaining payments instead of shortening the term.
pub fn apply_prepayment(
    baseline: &Schedule,
    input: &CreditInput,
    event: &Prepayment,
) -> CreditCalcResult<Schedule> {
    input.validate()?;
    if event.amount <= Decimal::ZERO {
        return Err(CreditCalcError::InvalidInput {
            field: "prepayment.amount".into(),
            reason: "Prepayment amount must be positive".into(),
        });
    }
    if event.month == 0 || event.month as usize > baseline.len() {
        return Err(CreditCalcError::InvalidInput {
            field: "prepayment.month".into(),
            reason: format!("Month must be between 1 and {}", baseline.len()),
        });
    }

    let event_idx = event.month as usize - 1;
    let outstanding = baseline[event_idx].remaining_balance;
    let paid_off = match event.kind {
        PrepaymentKind::Full => outstanding,
        // Never drive the balance negative
        PrepaymentKind::Partial => event.amount.min(outstanding),
    };
    let new_balance = outstanding - paid_off;

    let mut entries: Schedule = baseline[..=event_idx].to_vec();
    let entry = &mut entries[event_idx];
    entry.principal += paid_off;
    entry.monthly_payment += paid_off;
    entry.remaining_balance = new_balance;

    let remaining_months = input.term_months - event.month;
    if new_balance.is_zero() || remaining_months == 0 {
        return Ok(entries);
    }

    let tail = schedule::build(
        input.payment_type,
        new_balance,
        input.monthly_rate(),
        remaining_months,
        input.start_date,
        event.month,
    )?;
    entries.extend(tail);
    Ok(entries)
}
