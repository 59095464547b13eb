//! Error types for trip management

use crate::types::{ExpenseId, PersonId, TripId};
use crate::validate::ValidationError;
use thiserror::Error;

/// Result type for trip operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trip store errors
#[derive(Error, Debug)]
pub enum Error {
    /// Trip not found
    #[error("trip not found: {0}")]
    TripNotFound(TripId),

    /// Person not found in the trip
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    /// Expense not found in the trip
    #[error("expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    /// Expense failed validation
    #[error("invalid expense: {0}")]
    Validation(#[from] ValidationError),

    /// Persisted trip data could not be read or written
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
