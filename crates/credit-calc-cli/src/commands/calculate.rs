use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use credit_calc_core::api;
use credit_calc_core::{CreditInput, PaymentMethod};

use crate::input;

/// Arguments for a single-loan calculation
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 5.5)
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
}

/// CLI-facing amortisation method selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Annuity,
    Linear,
}

impl From<MethodArg> for PaymentMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Annuity => PaymentMethod::Annuity,
            MethodArg::Linear => PaymentMethod::Linear,
        }
    }
}

/// Build a loan input from individual flags. The core requires an explicit
/// start date; the CLI fills in today when the flag is omitted.
pub(crate) fn credit_from_flags(
    amount: Option<Decimal>,
    rate: Option<Decimal>,
    term_months: Option<u32>,
    payment_type: MethodArg,
    start_date: Option<NaiveDate>,
) -> Result<CreditInput, Box<dyn std::error::Error>> {
    Ok(CreditInput {
        amount: amount.ok_or("--amount is required (or provide --input)")?,
        annual_interest_rate: rate.ok_or("--rate is required (or provide --input)")?,
        term_months: term_months.ok_or("--term-months is required (or provide --input)")?,
        payment_type: payment_type.into(),
        start_date: start_date.unwrap_or_else(|| chrono::Local::now().date_naive()),
    })
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let credit: CreditInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        credit_from_flags(
            args.amount,
            args.rate,
            args.term_months,
            args.payment_type,
            args.start_date,
        )?
    };

    let result = api::calculate(&credit)?;
    Ok(serde_json::to_value(result)?)
}
