//! Typed request/response contract for the surrounding service layer.
//!
//! Field names mirror the HTTP API this engine sits behind: requests arrive
//! as `{credit, prepayment}` / `{credit, rate_change}` / `{credits}` and every
//! single-loan response is a `{summary, schedule}` pair. Export endpoints
//! (CSV/PDF rendering) consume these exact shapes and live outside the core.

use serde::{Deserialize, Serialize};

use crate::comparison::{self, ComparisonResult};
use crate::scenarios::{apply_prepayment, apply_rate_change, Prepayment, RateChange};
use crate::schedule::generate;
use crate::summary::summarize;
use crate::types::{CreditInput, Schedule, Summary};
use crate::CreditCalcResult;

/// Response envelope for every single-loan calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub summary: Summary,
    pub schedule: Schedule,
}

/// Request: price a loan under a prepayment event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepaymentRequest {
    pub credit: CreditInput,
    pub prepayment: Prepayment,
}

/// Request: price a loan under a rate change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateChangeRequest {
    pub credit: CreditInput,
    pub rate_change: RateChange,
}

/// Request: compare independent loans by total cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub credits: Vec<CreditInput>,
}

/// Price a loan as-is.
pub fn calculate(credit: &CreditInput) -> CreditCalcResult<CalculationResult> {
    let schedule = generate(credit)?;
    let summary = summarize(&schedule, credit, None)?;
    Ok(CalculationResult { summary, schedule })
}

/// Price a loan under a prepayment; the summary reports savings against the
/// unmodified baseline.
pub fn calculate_with_prepayment(req: &PrepaymentRequest) -> CreditCalcResult<CalculationResult> {
    let baseline = generate(&req.credit)?;
    let baseline_summary = summarize(&baseline, &req.credit, None)?;
    let schedule = apply_prepayment(&baseline, &req.credit, &req.prepayment)?;
    let summary = summarize(&schedule, &req.credit, Some(&baseline_summary))?;
    Ok(CalculationResult { summary, schedule })
}

/// Price a loan under a rate change; the savings field goes negative when
/// the rate rises.
pub fn calculate_rate_change(req: &RateChangeRequest) -> CreditCalcResult<CalculationResult> {
    let baseline = generate(&req.credit)?;
    let baseline_summary = summarize(&baseline, &req.credit, None)?;
    let schedule = apply_rate_change(&baseline, &req.credit, &req.rate_change)?;
    let summary = summarize(&schedule, &req.credit, Some(&baseline_summary))?;
    Ok(CalculationResult { summary, schedule })
}

/// Price and compare 2-3 loans.
pub fn compare(req: &ComparisonRequest) -> CreditCalcResult<ComparisonResult> {
    comparison::compare(&req.credits)
}
