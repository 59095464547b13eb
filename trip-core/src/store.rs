//! Trip state container
//!
//! Owns the trip list and all mutation: adding/removing people,
//! adding/updating/deleting expenses, and persistence. The settlement
//! engine never touches this store; callers pass `&Trip` snapshots to
//! the engine explicitly.
//!
//! # Referential integrity
//!
//! Removing a person also removes every expense that references them
//! as payer or participant (cascading delete). Combined with expense
//! validation on insert/update, this keeps every `paid_by` and
//! `split_among` ID pointing at a current participant.
//!
//! # Persistence
//!
//! The whole trip list is written as a single JSON array, in the
//! same camelCase shape the web app stores, so existing data files
//! load unchanged. Each mutation rewrites the file when autosave is
//! enabled.

use crate::{
    config::Config,
    types::{Expense, ExpenseDraft, ExpenseId, Person, PersonId, Trip, TripId},
    validate::validate_expense,
    Error, Result,
};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// In-memory trip list with JSON file persistence
#[derive(Debug)]
pub struct TripStore {
    /// Trips in creation order
    trips: Vec<Trip>,

    /// Persistence target; `None` for a purely in-memory store
    data_file: Option<PathBuf>,

    /// Persist after every mutation
    autosave: bool,
}

impl TripStore {
    /// Create an empty store without persistence
    pub fn in_memory() -> Self {
        Self {
            trips: Vec::new(),
            data_file: None,
            autosave: false,
        }
    }

    /// Open a store backed by the configured data file
    ///
    /// Loads the existing trip list if the file exists; starts empty
    /// otherwise. A malformed file is an error, not silently dropped.
    pub fn open(config: &Config) -> Result<Self> {
        let trips = if config.data_file.exists() {
            Self::load(&config.data_file)?
        } else {
            Vec::new()
        };

        tracing::info!(
            "Opened trip store with {} trips from {}",
            trips.len(),
            config.data_file.display()
        );

        Ok(Self {
            trips,
            data_file: Some(config.data_file.clone()),
            autosave: config.autosave,
        })
    }

    /// Read a persisted trip list
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Trip>> {
        let content = std::fs::read_to_string(path)?;
        let trips: Vec<Trip> = serde_json::from_str(&content)?;
        Ok(trips)
    }

    /// Write the current trip list to the data file
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.trips)?;
        std::fs::write(path, json)?;

        tracing::debug!("Saved {} trips to {}", self.trips.len(), path.display());
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        if self.autosave {
            self.save()?;
        }
        Ok(())
    }

    /// All trips, in creation order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Look up a trip
    pub fn trip(&self, id: &TripId) -> Result<&Trip> {
        self.trips
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| Error::TripNotFound(id.clone()))
    }

    fn trip_mut(&mut self, id: &TripId) -> Result<&mut Trip> {
        self.trips
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| Error::TripNotFound(id.clone()))
    }

    /// Create a new empty trip
    pub fn create_trip(&mut self, name: impl Into<String>) -> Result<TripId> {
        let trip = Trip::new(TripId::generate(), name);
        let id = trip.id.clone();

        tracing::info!("Created trip {} ({})", trip.name, id);
        self.trips.push(trip);
        self.persist()?;

        Ok(id)
    }

    /// Delete a trip and everything in it
    pub fn remove_trip(&mut self, id: &TripId) -> Result<()> {
        let before = self.trips.len();
        self.trips.retain(|t| &t.id != id);
        if self.trips.len() == before {
            return Err(Error::TripNotFound(id.clone()));
        }

        tracing::info!("Removed trip {}", id);
        self.persist()
    }

    /// Add a participant to a trip
    pub fn add_person(&mut self, trip_id: &TripId, name: impl Into<String>) -> Result<PersonId> {
        let trip = self.trip_mut(trip_id)?;
        let person = Person {
            id: PersonId::generate(),
            name: name.into(),
        };
        let id = person.id.clone();

        trip.people.push(person);
        self.persist()?;

        Ok(id)
    }

    /// Remove a participant from a trip
    ///
    /// Cascading delete: every expense the person paid or participates
    /// in is removed along with them.
    pub fn remove_person(&mut self, trip_id: &TripId, person_id: &PersonId) -> Result<()> {
        let trip = self.trip_mut(trip_id)?;

        if !trip.contains_person(person_id) {
            return Err(Error::PersonNotFound(person_id.clone()));
        }

        trip.people.retain(|p| &p.id != person_id);

        let before = trip.expenses.len();
        trip.expenses
            .retain(|e| &e.paid_by != person_id && !e.split_among.contains(person_id));
        let removed = before - trip.expenses.len();

        tracing::info!(
            "Removed person {} from trip {} ({} expenses cascaded)",
            person_id,
            trip_id,
            removed
        );
        self.persist()
    }

    /// Validate and add an expense
    pub fn add_expense(&mut self, trip_id: &TripId, draft: ExpenseDraft) -> Result<ExpenseId> {
        let trip = self.trip_mut(trip_id)?;

        let expense = Expense {
            id: ExpenseId::generate(),
            title: draft.title,
            amount: draft.amount,
            paid_by: draft.paid_by,
            split_among: draft.split_among,
            custom_splits: draft.custom_splits,
            date: draft.date.unwrap_or_else(Utc::now),
        };

        validate_expense(trip, &expense)?;
        let id = expense.id.clone();

        tracing::info!(
            "Added expense {} ({}) to trip {}",
            expense.title,
            expense.amount,
            trip_id
        );
        trip.expenses.push(expense);
        self.persist()?;

        Ok(id)
    }

    /// Validate and replace an existing expense
    pub fn update_expense(&mut self, trip_id: &TripId, expense: Expense) -> Result<()> {
        let trip = self.trip_mut(trip_id)?;

        validate_expense(trip, &expense)?;

        let slot = trip
            .expenses
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or_else(|| Error::ExpenseNotFound(expense.id.clone()))?;
        *slot = expense;

        self.persist()
    }

    /// Delete an expense
    pub fn remove_expense(&mut self, trip_id: &TripId, expense_id: &ExpenseId) -> Result<()> {
        let trip = self.trip_mut(trip_id)?;

        let before = trip.expenses.len();
        trip.expenses.retain(|e| &e.id != expense_id);
        if trip.expenses.len() == before {
            return Err(Error::ExpenseNotFound(expense_id.clone()));
        }

        self.persist()
    }
}
