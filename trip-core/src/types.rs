//! Core types for trips, people, and expenses
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money)
//! - JSON persistence compatible with the web app's trip format (camelCase)
//! - Read-only consumption by the settlement engine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Trip identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(String);

impl TripId {
    /// Create from an existing ID string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Person identifier, unique within a trip
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create from an existing ID string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expense identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create from an existing ID string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trip participant
///
/// Identity is by `id`; names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Person ID
    pub id: PersonId,

    /// Display name
    pub name: String,
}

/// A logged expense
///
/// The expense amount is split either evenly across `split_among`
/// or by the explicit per-person amounts in `custom_splits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense ID
    pub id: ExpenseId,

    /// Short description ("Dinner", "Taxi", ...)
    pub title: String,

    /// Total amount paid (exact decimal, must be positive)
    pub amount: Decimal,

    /// Person who paid the full amount
    pub paid_by: PersonId,

    /// Participants the amount is split among (non-empty)
    pub split_among: Vec<PersonId>,

    /// Explicit per-person amounts; when present, covers exactly
    /// `split_among` and sums to `amount` within the cent tolerance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_splits: Option<HashMap<PersonId, Decimal>>,

    /// When the expense occurred
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Whether this expense uses explicit per-person amounts
    pub fn is_custom_split(&self) -> bool {
        self.custom_splits.is_some()
    }

    /// The share debited to `person` under this expense's split mode
    ///
    /// Returns `None` when the person does not participate. Equal
    /// splits divide the amount by the participant count; the result
    /// is not guaranteed to be exact to the cent and no remainder is
    /// redistributed.
    pub fn share_of(&self, person: &PersonId) -> Option<Decimal> {
        match &self.custom_splits {
            Some(splits) => splits.get(person).copied(),
            None => {
                if self.split_among.contains(person) {
                    Some(self.amount / Decimal::from(self.split_among.len() as u64))
                } else {
                    None
                }
            }
        }
    }
}

/// Input for creating or updating an expense
///
/// The store validates a draft and assigns the expense ID and date.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    /// Short description
    pub title: String,

    /// Total amount paid
    pub amount: Decimal,

    /// Person who paid
    pub paid_by: PersonId,

    /// Participants to split among
    pub split_among: Vec<PersonId>,

    /// Explicit per-person amounts (optional)
    pub custom_splits: Option<HashMap<PersonId, Decimal>>,

    /// When the expense occurred; `None` means now
    pub date: Option<DateTime<Utc>>,
}

/// A named group expense-sharing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Trip ID
    pub id: TripId,

    /// Trip name
    pub name: String,

    /// Participants, in insertion order
    pub people: Vec<Person>,

    /// Logged expenses, in insertion order
    pub expenses: Vec<Expense>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Create an empty trip
    pub fn new(id: TripId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            people: Vec::new(),
            expenses: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Look up a participant by ID
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    /// Participant name, if the ID is known
    pub fn person_name(&self, id: &PersonId) -> Option<&str> {
        self.person(id).map(|p| p.name.as_str())
    }

    /// Whether the ID refers to a current participant
    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.person(id).is_some()
    }

    /// Look up an expense by ID
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str) -> Person {
        Person {
            id: PersonId::new(id),
            name: id.to_uppercase(),
        }
    }

    fn equal_expense(amount: Decimal, paid_by: &str, split: &[&str]) -> Expense {
        Expense {
            id: ExpenseId::generate(),
            title: "Dinner".to_string(),
            amount,
            paid_by: PersonId::new(paid_by),
            split_among: split.iter().map(|s| PersonId::new(*s)).collect(),
            custom_splits: None,
            date: Utc::now(),
        }
    }

    #[test]
    fn test_equal_share() {
        let expense = equal_expense(Decimal::new(30000, 2), "alice", &["alice", "bob", "carol"]);

        let share = expense.share_of(&PersonId::new("bob")).unwrap();
        assert_eq!(share, Decimal::new(10000, 2));

        // Non-participant has no share
        assert!(expense.share_of(&PersonId::new("dave")).is_none());
    }

    #[test]
    fn test_custom_share() {
        let mut expense = equal_expense(Decimal::new(10000, 2), "alice", &["alice", "bob"]);
        expense.custom_splits = Some(HashMap::from([
            (PersonId::new("alice"), Decimal::new(6000, 2)),
            (PersonId::new("bob"), Decimal::new(4000, 2)),
        ]));

        assert!(expense.is_custom_split());
        assert_eq!(
            expense.share_of(&PersonId::new("bob")),
            Some(Decimal::new(4000, 2))
        );
    }

    #[test]
    fn test_trip_lookups_and_total() {
        let mut trip = Trip::new(TripId::generate(), "Goa");
        trip.people.push(person("alice"));
        trip.people.push(person("bob"));
        trip.expenses
            .push(equal_expense(Decimal::new(5000, 2), "alice", &["alice", "bob"]));
        trip.expenses
            .push(equal_expense(Decimal::new(2550, 2), "bob", &["alice", "bob"]));

        assert_eq!(trip.person_name(&PersonId::new("alice")), Some("ALICE"));
        assert!(!trip.contains_person(&PersonId::new("dave")));
        assert_eq!(trip.total_spent(), Decimal::new(7550, 2));
    }

    #[test]
    fn test_trip_json_round_trip() {
        let mut trip = Trip::new(TripId::new("t1"), "Goa");
        trip.people.push(person("alice"));
        trip.expenses
            .push(equal_expense(Decimal::new(5000, 2), "alice", &["alice"]));

        let json = serde_json::to_string(&trip).unwrap();
        // Persisted field names stay camelCase for compatibility
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"paidBy\""));
        assert!(json.contains("\"splitAmong\""));

        let back: Trip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trip);
    }
}
