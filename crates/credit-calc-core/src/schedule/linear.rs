//! Linear amortisation: constant principal share, declining total payment.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{Money, Rate, Schedule, ScheduleEntry};
use crate::CreditCalcResult;

pub(crate) fn build(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
    start_date: NaiveDate,
    month_offset: u32,
) -> CreditCalcResult<Schedule> {
    let principal_share = principal / Decimal::from(term_months);
    let principal_paid = principal_share.round_dp(2);

    let mut entries = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for m in 1..=term_months {
        let month = month_offset + m;
        let interest = (balance * monthly_rate).round_dp(2);
        balance -= principal_share;

        let remaining = if m == term_months {
            // The even split leaves at most a sub-cent residue; the final
            // entry lands exactly at zero.
            Decimal::ZERO
        } else {
            balance.round_dp(2).max(Decimal::ZERO)
        };

        entries.push(ScheduleEntry {
            month,
            payment_date: super::payment_date(start_date, month)?,
            monthly_payment: principal_paid + interest,
            principal: principal_paid,
            interest,
            remaining_balance: remaining,
        });
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
            payment_type: PaymentMethod::Linear,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_reference_loan_first_month() {
        let schedule = generate(&input()).unwrap();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].principal, dec!(833.33));
        assert_eq!(schedule[0].interest, dec!(50.00));
        assert_eq!(schedule[0].monthly_payment, dec!(883.33));
    }

    #[test]
    fn test_reference_loan_final_month() {
        let schedule = generate(&input()).unwrap();
        let last = &schedule[11];
        assert_eq!(last.principal, dec!(833.33));
        assert_eq!(last.interest, dec!(4.17));
        assert_eq!(last.monthly_payment, dec!(837.50));
        assert_eq!(last.remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_principal_share_constant() {
        let schedule = generate(&input()).unwrap();
        for entry in &schedule {
            assert_eq!(entry.principal, dec!(833.33));
        }
    }

    #[test]
    fn test_payments_non_increasing() {
        let schedule = generate(&input()).unwrap();
        for pair in schedule.windows(2) {
            assert!(pair[1].monthly_payment <= pair[0].monthly_payment);
        }
    }

    #[test]
    fn test_zero_rate_payment_equals_principal_share() {
        let mut i = input();
        i.annual_interest_rate = Decimal::ZERO;
        let schedule = generate(&i).unwrap();
        for entry in &schedule {
            assert_eq!(entry.monthly_payment, entry.principal);
            assert_eq!(entry.interest, dec!(0.00));
        }
    }

    #[test]
    fn test_midterm_balance() {
        let schedule = generate(&input()).unwrap();
        // Half the term paid, half the principal outstanding
        assert_eq!(schedule[5].remaining_balance, dec!(5000.00));
    }
}
