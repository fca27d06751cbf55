use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentUpdateError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("{0}")]
    UnsupportedPeriod(String),

    #[error("Unknown update type: {key}. Available: {available}")]
    UnknownStrategy { key: String, available: String },

    #[error("{0}")]
    DataUnavailable(String),

    #[error("{0}")]
    Connection(String),

    #[error("Invalid JSON response: {0}")]
    MalformedResponse(String),
}
