use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreditCalcError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CreditCalcError {
    fn from(e: serde_json::Error) -> Self {
        CreditCalcError::SerializationError(e.to_string())
    }
}
