use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use credit_calc_core::api::{self, PrepaymentRequest, RateChangeRequest};
use credit_calc_core::scenarios::{Prepayment, PrepaymentKind, RateChange};

use super::calculate::{credit_from_flags, MethodArg};
use crate::input;

/// Arguments for a prepayment scenario
#[derive(Args)]
pub struct PrepaymentArgs {
    /// Path to JSON input file with {credit, prepayment} (overrides flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Amortisation method
    #[arg(long, value_enum, default_value = "annuity")]
    pub payment_type: MethodArg,

    /// Loan start date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Amount paid ahead of schedule
    #[arg(long)]
    pub prepayment_amount: Option<Decimal>,

    /// Month the prepayment lands in
    #[arg(long)]
    pub prepayment_month: Option<u32>,

    /// Partial reduces the balance; full clears the loan
    #[arg(long, value_enum, default_value = "partial")]
    pub prepayment_type: KindArg,
}

/// CLI-facing prepayment kind selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Partial,
    Full,
}

impl From<KindArg> for PrepaymentKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Partial => PrepaymentKind::Partial,
            KindArg::Full => PrepaymentKind::Full,
        }
    }
}

pub fn run_prepayment(args: PrepaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: PrepaymentRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PrepaymentRequest {
            credit: credit_from_flags(
                args.amount,
                args.rate,
                args.term_months,
                args.payment_type,
                args.start_date,
            )?,
            prepayment: Prepayment {
                amount: args
                    .prepayment_amount
                    .ok_or("--prepayment-amount is required (or provide --input)")?,
                month: args
                    .prepayment_month
                    .ok_or("--prepayment-month is required (or provide --input)")?,
                kind: args.prepayment_type.into(),
            },
        }
    };

    let result = api::calculate_with_prepayment(&request)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a rate-change scenario
#[derive(Args)]
pub struct RateChangeArgs {
    /// Path to JSON input file with {credit, rate_change} (overrides flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Amortisation method
    #[arg(long, value_enum, default_value = "annuity")]
    pub payment_type: MethodArg,

    /// Loan start date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Rate adjustment in percentage points (1 for +1%, -0.5 for -0.5%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate_change: Option<Decimal>,

    /// First month priced at the new rate
    #[arg(long, default_value_t = 1)]
    pub effective_from: u32,
}

pub fn run_rate_change(args: RateChangeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: RateChangeRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RateChangeRequest {
            credit: credit_from_flags(
                args.amount,
                args.rate,
                args.term_months,
                args.payment_type,
                args.start_date,
            )?,
            rate_change: RateChange {
                rate_change: args
                    .rate_change
                    .ok_or("--rate-change is required (or provide --input)")?,
                effective_from_month: args.effective_from,
            },
        }
    };

    let result = api::calculate_rate_change(&request)?;
    Ok(serde_json::to_value(result)?)
}
