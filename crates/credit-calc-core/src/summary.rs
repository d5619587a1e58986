//! Reduction of a schedule into headline totals.

use rust_decimal::Decimal;

use crate::error::CreditCalcError;
use crate::types::{CreditInput, Schedule, Summary};
use crate::CreditCalcResult;

/// Reduce a schedule to totals, the average payment, and (when a baseline
/// summary is supplied) the interest saved relative to it. Savings are
/// reported as-is and may be negative: a rate increase legitimately raises
/// the cost of the scenario schedule.
pub fn summarize(
    schedule: &Schedule,
    input: &CreditInput,
    baseline: Option<&Summary>,
) -> CreditCalcResult<Summary> {
    if schedule.is_empty() {
        return Err(CreditCalcError::InsufficientData(
            "Cannot summarise an empty schedule".into(),
        ));
    }

    let mut total_interest = Decimal::ZERO;
    let mut total_payments = Decimal::ZERO;
    for entry in schedule {
        total_interest += entry.interest;
        total_payments += entry.monthly_payment;
    }

    let total_amount = input.amount.round_dp(2);
    Ok(Summary {
        total_amount,
        total_interest,
        total_cost: total_amount + total_interest,
        monthly_payment_avg: (total_payments / Decimal::from(schedule.len())).round_dp(2),
        payment_type: input.payment_type.label().to_string(),
        prepayment_savings: baseline.map(|b| b.total_interest - total_interest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::generate;
    use crate::types::PaymentMethod;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn input(payment_type: PaymentMethod) -> CreditInput {
        CreditInput {
            amount: dec!(10000),
            annual_interest_rate: dec!(6),
            term_months: 12,
            payment_type,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_linear_reference_totals() {
        let credit = input(PaymentMethod::Linear);
        let schedule = generate(&credit).unwrap();
        let summary = summarize(&schedule, &credit, None).unwrap();

        assert_eq!(summary.total_amount, dec!(10000));
        assert_eq!(summary.total_interest, dec!(325.00));
        assert_eq!(summary.total_cost, dec!(10325.00));
        assert_eq!(summary.monthly_payment_avg, dec!(860.41));
        assert_eq!(summary.payment_type, "Linear");
        assert_eq!(summary.prepayment_savings, None);
    }

    #[test]
    fn test_annuity_totals_within_rounding_tolerance() {
        let credit = input(PaymentMethod::Annuity);
        let schedule = generate(&credit).unwrap();
        let summary = summarize(&schedule, &credit, None).unwrap();

        // Exact total is 12 payments of ~860.6643 minus the principal
        assert!((summary.total_interest - dec!(327.97)).abs() <= dec!(0.02));
        assert_eq!(summary.total_cost, summary.total_amount + summary.total_interest);
        assert_eq!(summary.payment_type, "Annuity");
    }

    #[test]
    fn test_total_cost_equals_payment_sum() {
        let credit = input(PaymentMethod::Annuity);
        let schedule = generate(&credit).unwrap();
        let summary = summarize(&schedule, &credit, None).unwrap();
        let payments: Decimal = schedule.iter().map(|e| e.monthly_payment).sum();
        assert!((payments - summary.total_cost).abs() <= dec!(0.10));
    }

    #[cfg(feature = "scenarios")]
    use crate::scenarios::{
        apply_prepayment, apply_rate_change, Prepayment, PrepaymentKind, RateChange,
    };

    #[cfg(feature = "scenarios")]
    #[test]
    fn test_prepayment_savings_positive() {
        let credit = input(PaymentMethod::Annuity);
        let baseline = generate(&credit).unwrap();
        let baseline_summary = summarize(&baseline, &credit, None).unwrap();

        let event = Prepayment {
            amount: dec!(2000),
            month: 3,
            kind: PrepaymentKind::Partial,
        };
        let scenario = apply_prepayment(&baseline, &credit, &event).unwrap();
        let summary = summarize(&scenario, &credit, Some(&baseline_summary)).unwrap();

        let savings = summary.prepayment_savings.unwrap();
        assert!(savings > Decimal::ZERO);
        assert_eq!(
            savings,
            baseline_summary.total_interest - summary.total_interest
        );
    }

    #[cfg(feature = "scenarios")]
    #[test]
    fn test_rate_increase_yields_negative_savings() {
        let credit = input(PaymentMethod::Annuity);
        let baseline = generate(&credit).unwrap();
        let baseline_summary = summarize(&baseline, &credit, None).unwrap();

        let event = RateChange {
            rate_change: dec!(2),
            effective_from_month: 1,
        };
        let scenario = apply_rate_change(&baseline, &credit, &event).unwrap();
        let summary = summarize(&scenario, &credit, Some(&baseline_summary)).unwrap();

        assert!(summary.prepayment_savings.unwrap() < Decimal::ZERO);
    }

    #[test]
    fn test_empty_schedule_rejected() {
        let credit = input(PaymentMethod::Annuity);
        assert!(summarize(&Vec::new(), &credit, None).is_err());
    }
}
