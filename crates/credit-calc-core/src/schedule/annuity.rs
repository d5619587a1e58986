//! Annuity amortisation: constant total payment, growing principal share.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};

use crate::types::{Money, Rate, Schedule, ScheduleEntry};
use crate::CreditCalcResult;

/// Fixed monthly payment: A = P * r * (1+r)^n / ((1+r)^n - 1).
///
/// At zero rate the formula degenerates to a division by zero; the payment is
/// then a plain even split of the principal.
pub(crate) fn monthly_payment(principal: Money, monthly_rate: Rate, term_months: u32) -> Money {
    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }
    let factor = (Decimal::ONE + monthly_rate).powi(term_months as i64);
    principal * monthly_rate * factor / (factor - Decimal::ONE)
}

pub(crate) fn build(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
    start_date: NaiveDate,
    month_offset: u32,
) -> CreditCalcResult<Schedule> {
    let annuity = monthly_payment(principal, monthly_rate, term_months);
    let payment = annuity.round_dp(2);

    let mut entries = Vec::with_capacity(term_months as usize);
    // Balance is carried at full precision; only the stored fields are
    // rounded to whole cents.
    let mut balance = principal;

    for m in 1..=term_months {
        let month = month_offset + m;
        let interest = (balance * monthly_rate).round_dp(2);

        let entry = if m == term_months {
            // The final month absorbs all cumulative rounding drift: the whole
            // remaining balance is repaid and the balance lands exactly at zero.
            let principal_due = balance.round_dp(2);
            ScheduleEntry {
                month,
                payment_date: super::payment_date(start_date, month)?,
                monthly_payment: principal_due + interest,
                principal: principal_due,
                interest,
                remaining_balance: Decimal::ZERO,
            }
        } else {
            balance -= annuity - balance * monthly_rate;
            ScheduleEntry {
                month,
                payment_date: super::payment_date(start_date, month)?,
                monthly_payment: payment,
                principal: payment - interest,
                interest,
                remaining_balance: balance.round_dp(2).max(Decimal::ZERO),
            }
        };
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use crate::schedule::generate;
    use crate::types::{CreditInput, PaymentMethod};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn input() -> CreditInput {
        CreditInput {
            amount: dec!(10000),
            annual_interest_rate: dec!(6),
            term_months: 12,
            payment_type: PaymentMethod::Annuity,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_reference_loan_first_month() {
        let schedule = generate(&input()).unwrap();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].interest, dec!(50.00));
        assert_eq!(schedule[0].monthly_payment, dec!(860.66));
        assert_eq!(schedule[0].principal, dec!(810.66));
        assert_eq!(schedule[0].remaining_balance, dec!(9189.34));
    }

    #[test]
    fn test_second_month_interest_accrues_on_reduced_balance() {
        let schedule = generate(&input()).unwrap();
        assert_eq!(schedule[1].interest, dec!(45.95));
    }

    #[test]
    fn test_payment_constant_except_final_month() {
        let schedule = generate(&input()).unwrap();
        for entry in &schedule[..11] {
            assert_eq!(entry.monthly_payment, dec!(860.66));
        }
        // Final payment lands within a cent of the annuity after drift absorption
        let last = &schedule[11];
        assert!((last.monthly_payment - dec!(860.66)).abs() <= dec!(0.01));
    }

    #[test]
    fn test_final_balance_is_zero() {
        let schedule = generate(&input()).unwrap();
        assert_eq!(schedule[11].remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_balance_decreases_monotonically() {
        let schedule = generate(&input()).unwrap();
        for pair in schedule.windows(2) {
            assert!(pair[1].remaining_balance < pair[0].remaining_balance);
        }
    }

    #[test]
    fn test_principal_sums_to_amount() {
        let schedule = generate(&input()).unwrap();
        let total: Decimal = schedule.iter().map(|e| e.principal).sum();
        assert!((total - dec!(10000)).abs() <= dec!(0.05));
    }

    #[test]
    fn test_zero_rate_splits_principal_evenly() {
        let mut i = input();
        i.amount = dec!(1200);
        i.annual_interest_rate = Decimal::ZERO;
        let schedule = generate(&i).unwrap();
        for entry in &schedule {
            assert_eq!(entry.monthly_payment, dec!(100.00));
            assert_eq!(entry.interest, dec!(0.00));
        }
        assert_eq!(schedule[11].remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_single_month_term() {
        let mut i = input();
        i.term_months = 1;
        let schedule = generate(&i).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].principal, dec!(10000.00));
        assert_eq!(schedule[0].interest, dec!(50.00));
        assert_eq!(schedule[0].monthly_payment, dec!(10050.00));
        assert_eq!(schedule[0].remaining_balance, Decimal::ZERO);
    }
}
