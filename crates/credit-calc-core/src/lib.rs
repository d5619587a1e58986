pub mod error;
pub mod schedule;
pub mod summary;
pub mod types;

#[cfg(feature = "scenarios")]
pub mod scenarios;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "api")]
pub mod api;

pub use error::CreditCalcError;
pub use types::*;

/// Standard result type for all credit-calc operations
pub type CreditCalcResult<T> = Result<T, CreditCalcError>;
