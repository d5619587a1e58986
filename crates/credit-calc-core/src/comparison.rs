//! Side-by-side comparison of independent loan offers.

use serde::{Deserialize, Serialize};

use crate::error::CreditCalcError;
use crate::schedule;
use crate::summary;
use crate::types::{CreditInput, Summary};
use crate::CreditCalcResult;

/// Minimum number of loans in a comparison.
pub const MIN_LOANS: usize = 2;
/// Maximum number of loans in a comparison.
pub const MAX_LOANS: usize = 3;

/// One compared loan: the input it was priced from and its summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub input: CreditInput,
    pub summary: Summary,
}

/// Ordered comparison of independently priced loans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub comparisons: Vec<ComparisonEntry>,
}

impl ComparisonResult {
    /// Index of the lowest-total-cost loan. Ties resolve to the earliest
    /// index, so the selection is deterministic. Recomputed on demand rather
    /// than persisted.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, entry) in self.comparisons.iter().enumerate() {
            match best {
                Some(b) if self.comparisons[b].summary.total_cost <= entry.summary.total_cost => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

/// Price each loan independently and collect the results in input order.
/// No cross-loan interaction: every loan is a fresh generate-and-summarise.
pub fn compare(credits: &[CreditInput]) -> CreditCalcResult<ComparisonResult> {
    if credits.len() < MIN_LOANS || credits.len() > MAX_LOANS {
        return Err(CreditCalcError::InvalidInput {
            field: "credits".into(),
            reason: format!("Comparison takes between {MIN_LOANS} and {MAX_LOANS} loans"),
        });
    }

    let mut comparisons = Vec::with_capacity(credits.len());
    for credit in credits {
        let schedule = schedule::generate(credit)?;
        let summary = summary::summarize(&schedule, credit, None)?;
        comparisons.push(ComparisonEntry {
            input: credit.clone(),
            summary,
        });
    }

    Ok(ComparisonResult { comparisons })
}
