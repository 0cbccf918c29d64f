use thiserror::Error;

/// Rejections produced by the record validator. These surface as 400
/// responses and never cause a write.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Amounts must be non-negative numbers")]
    InvalidAmount,

    #[error("Advance amount cannot be greater than total salary")]
    AdvanceExceedsTotal,
}

/// Failures of the backing store. Business rules are checked before any
/// store call, so these are I/O-class problems and map to 500 responses.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored record carries unknown payment status: {0}")]
    InvalidStatus(String),
}
