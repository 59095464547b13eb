//! Error types for the settlement engine

use thiserror::Error;
use trip_core::{ExpenseId, PersonId};

/// Result type for settlement operations
pub type Result<T> = std::result::Result<T, Error>;

/// Settlement errors
#[derive(Error, Debug)]
pub enum Error {
    /// Trip store error
    #[error("trip error: {0}")]
    Trip(#[from] trip_core::Error),

    /// An expense references a person who is not in the trip
    ///
    /// Well-formed trips never produce this: the store validates
    /// expenses on insert and cascades deletes on person removal.
    #[error("expense {expense_id} references unknown person {person_id}")]
    UnknownPerson {
        /// The offending expense
        expense_id: ExpenseId,
        /// The dangling reference
        person_id: PersonId,
    },

    /// CSV export error
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
