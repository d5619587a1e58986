use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CreditCalcError;
use crate::CreditCalcResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Periodic rates expressed as decimals (0.005 = 0.5% per month).
pub type Rate = Decimal;

/// Maximum loan term accepted by the engine (40 years).
pub const MAX_TERM_MONTHS: u32 = 480;

/// Amortisation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Constant total payment; the principal share grows over time
    Annuity,
    /// Constant principal share; the total payment declines over time
    Linear,
}

impl PaymentMethod {
    /// Display label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Annuity => "Annuity",
            PaymentMethod::Linear => "Linear",
        }
    }
}

/// Validated loan description. Immutable once a schedule is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditInput {
    /// Principal borrowed, in currency units
    pub amount: Money,
    /// Annual interest rate as a percentage (6 = 6% p.a.)
    pub annual_interest_rate: Decimal,
    /// Repayment term in whole months
    pub term_months: u32,
    /// Amortisation method
    pub payment_type: PaymentMethod,
    /// Date the loan starts; the first payment falls one month later
    pub start_date: NaiveDate,
}

impl CreditInput {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> CreditCalcResult<()> {
        if self.amount <= Decimal::ZERO {
            return Err(CreditCalcError::InvalidInput {
                field: "amount".into(),
                reason: "Loan amount must be positive".into(),
            });
        }
        if self.annual_interest_rate < Decimal::ZERO || self.annual_interest_rate > dec!(100) {
            return Err(CreditCalcError::InvalidInput {
                field: "annual_interest_rate".into(),
                reason: "Annual rate must be between 0 and 100 percent".into(),
            });
        }
        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(CreditCalcError::InvalidInput {
                field: "term_months".into(),
                reason: format!("Term must be between 1 and {MAX_TERM_MONTHS} months"),
            });
        }
        Ok(())
    }

    /// Monthly periodic rate: annual percentage / 100 / 12.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_interest_rate / dec!(100) / dec!(12)
    }
}

/// A single row of a repayment plan.
///
/// Invariants: `monthly_payment == principal + interest` exactly on the stored
/// 2 dp values, and the final entry's `remaining_balance` is exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: u32,
    pub payment_date: NaiveDate,
    pub monthly_payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub remaining_balance: Money,
}

/// Full month-by-month repayment plan
pub type Schedule = Vec<ScheduleEntry>;

/// Compact reduction of a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_amount: Money,
    pub total_interest: Money,
    pub total_cost: Money,
    pub monthly_payment_avg: Money,
    pub payment_type: String,
    /// Baseline interest minus scenario interest; present only when a
    /// scenario was applied, negative when the scenario raises cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepayment_savings: Option<Money>,
}
