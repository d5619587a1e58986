use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CreditCalcError;
use crate::schedule;
use crate::types::{CreditInput, Schedule};
use crate::CreditCalcResult;

fn default_effective_from() -> u32 {
    1
}

/// A sustained adjustment to the annual rate from a given month onward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateChange {
    /// Change in percentage points (1 = +1%, -0.5 = -0.5%)
    pub rate_change: Decimal,
    /// First month priced at the new rate. The wire contract omits this
    /// field and reprices the whole loan, so it defaults to 1.
    #[serde(default = "default_effective_from")]
    pub effective_from_month: u32,
}

/// Recompute a schedule under a rate change.
///
/// Entries before the effective month are kept from the baseline; the tail is
/// regenerated from the balance at the end of the prior month with the
/// adjusted rate, unchanged method, and the original remaining term.
pub fn apply_rate_change(
    baseline: &Schedule,
    input: &CreditInput,
    event: &RateChange,
) -> CreditCalcResult<Schedule> {
    input.validate()?;

    let new_rate = input.annual_interest_rate + event.rate_change;
    if new_rate < Decimal::ZERO {
        return Err(CreditCalcError::InvalidInput {
            field: "rate_change".into(),
            reason: "Adjusted annual rate cannot be negative".into(),
        });
    }
    let effective = event.effective_from_month;
    if effective == 0 || effective as usize > baseline.len() {
        return Err(CreditCalcError::InvalidInput {
            field: "effective_from_month".into(),
            reason: format!("Month must be between 1 and {}", baseline.len()),
        });
    }

    let repriced = CreditInput {
        annual_interest_rate: new_rate,
        ..input.clone()
    };

    let paid_months = effective - 1;
    let balance = if paid_months == 0 {
        input.amount
    } else {
        baseline[paid_months as usize - 1].remaining_balance
    };

    let mut entries: Schedule = baseline[..paid_months as usize].to_vec();
    let tail = schedule::build(
        repriced.payment_type,
        balance,
        repriced.monthly_rate(),
        input.term_months - paid_months,
        input.start_date,
        paid_months,
    )?;
    entries.extend(tail);
    Ok(entries)
}
