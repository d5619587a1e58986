//! Scenario overlays: prepayment and rate-change simulation.
//!
//! Each overlay is a pure function over a baseline snapshot. Instead of
//! patching the baseline in place, the affected tail is regenerated through
//! the schedule builders from a modified balance or rate, so baseline and
//! scenario results can be compared side by side.

pub mod prepayment;
pub mod rate_change;

pub use prepayment::{apply_prepayment, Prepayment, PrepaymentKind};
pub use rate_change::{apply_rate_change, RateChange};
