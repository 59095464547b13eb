//! SplitEasy Trip Core
//!
//! Domain model and state container for group expense sharing: trips,
//! participants, expenses with equal or custom splits.
//!
//! # Architecture
//!
//! - **Owned state**: a [`TripStore`] holds the trip list and is the
//!   only place mutation happens; computation consumers receive
//!   read-only `&Trip` snapshots
//! - **Validation at the boundary**: expenses are validated before
//!   they enter a trip, so downstream computation assumes well-formed
//!   input
//! - **Cascading deletes**: removing a person removes every expense
//!   referencing them, preserving referential integrity
//! - **JSON persistence**: the whole trip list round-trips through a
//!   single JSON file in the web app's camelCase shape

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod config;
pub mod error;
pub mod store;
pub mod types;
pub mod validate;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use store::TripStore;
pub use types::{Expense, ExpenseDraft, ExpenseId, Person, PersonId, Trip, TripId};
pub use validate::{validate_expense, ValidationError};
