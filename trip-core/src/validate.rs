//! Expense validation
//!
//! Runs before an expense is constructed or updated, so the
//! settlement engine can assume well-formed input:
//!
//! - positive amount
//! - non-empty participant set
//! - every referenced person is currently in the trip
//! - custom splits cover exactly the participant set and sum to the
//!   amount within the cent tolerance

use crate::types::{Expense, PersonId, Trip};
use rust_decimal::Decimal;
use std::collections::HashSet;
use thiserror::Error;

/// Allowed drift between an expense amount and the sum of its custom
/// splits (one cent)
pub fn split_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Expense validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount is zero or negative
    #[error("expense amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Empty participant set
    #[error("expense must be split among at least one person")]
    NoParticipants,

    /// Referenced person is not in the trip
    #[error("person {0} is not part of the trip")]
    UnknownPerson(PersonId),

    /// Custom splits do not cover exactly the participant set
    #[error("custom splits must cover exactly the selected participants")]
    SplitCoverage,

    /// A custom split amount is negative
    #[error("custom split for {0} is negative")]
    NegativeSplit(PersonId),

    /// Custom splits do not add up to the expense amount
    #[error("custom splits total {actual} does not match expense amount {expected}")]
    SplitSumMismatch {
        /// The expense amount
        expected: Decimal,
        /// Sum of the custom split values
        actual: Decimal,
    },
}

/// Validate an expense against the trip it belongs to
pub fn validate_expense(trip: &Trip, expense: &Expense) -> Result<(), ValidationError> {
    if expense.amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(expense.amount));
    }

    if expense.split_among.is_empty() {
        return Err(ValidationError::NoParticipants);
    }

    if !trip.contains_person(&expense.paid_by) {
        return Err(ValidationError::UnknownPerson(expense.paid_by.clone()));
    }

    for person in &expense.split_among {
        if !trip.contains_person(person) {
            return Err(ValidationError::UnknownPerson(person.clone()));
        }
    }

    if let Some(splits) = &expense.custom_splits {
        let participants: HashSet<&PersonId> = expense.split_among.iter().collect();
        if splits.len() != participants.len() || !splits.keys().all(|p| participants.contains(p)) {
            return Err(ValidationError::SplitCoverage);
        }

        let mut total = Decimal::ZERO;
        for (person, amount) in splits {
            if *amount < Decimal::ZERO {
                return Err(ValidationError::NegativeSplit(person.clone()));
            }
            total += *amount;
        }

        if (total - expense.amount).abs() > split_tolerance() {
            return Err(ValidationError::SplitSumMismatch {
                expected: expense.amount,
                actual: total,
            });
        }
    }

    Ok(())
}
