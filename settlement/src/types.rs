//! Core types for the settlement engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trip_core::PersonId;

/// Tolerance below which a balance counts as settled (one cent)
///
/// Balances within ±0.01 of zero are treated as zero, and transfers
/// of 0.01 or less are never emitted. This absorbs the drift equal
/// splits can leave behind.
pub fn cent_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Net balance per person for one trip
///
/// Positive means the person is owed money by the group, negative
/// means they owe money. Iteration follows the trip's people order so
/// results render and settle deterministically.
#[derive(Debug, Clone, PartialEq)]
pub struct Balances {
    /// People in trip order
    order: Vec<PersonId>,

    /// Net amount per person
    amounts: HashMap<PersonId, Decimal>,
}

impl Balances {
    /// Initialize every person to zero
    pub(crate) fn with_people(people: impl IntoIterator<Item = PersonId>) -> Self {
        let order: Vec<PersonId> = people.into_iter().collect();
        let amounts = order
            .iter()
            .cloned()
            .map(|person| (person, Decimal::ZERO))
            .collect();
        Self { order, amounts }
    }

    pub(crate) fn amount_mut(&mut self, person: &PersonId) -> Option<&mut Decimal> {
        self.amounts.get_mut(person)
    }

    /// Net balance of a person, if they are part of the trip
    pub fn get(&self, person: &PersonId) -> Option<Decimal> {
        self.amounts.get(person).copied()
    }

    /// Number of people
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the trip has no people
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Balances in trip people order
    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, Decimal)> + '_ {
        self.order
            .iter()
            .map(move |person| (person, self.amounts[person]))
    }

    /// Sum of all balances (zero for well-formed trips, up to
    /// floating drift)
    pub fn total(&self) -> Decimal {
        self.amounts.values().copied().sum()
    }

    /// Standing of a person relative to the cent tolerance
    pub fn status_of(&self, person: &PersonId) -> Option<BalanceStatus> {
        self.get(person).map(BalanceStatus::of)
    }

    /// Presentational rows, in trip people order
    pub fn rows(&self) -> Vec<PersonBalance> {
        self.iter()
            .map(|(person, amount)| PersonBalance {
                person_id: person.clone(),
                amount,
                status: BalanceStatus::of(amount),
            })
            .collect()
    }
}

/// A person's standing once balances are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceStatus {
    /// Owed money by the group
    GetsBack,
    /// Owes money to the group
    Owes,
    /// Within tolerance of zero
    Settled,
}

impl BalanceStatus {
    /// Classify a net amount
    pub fn of(amount: Decimal) -> Self {
        if amount > cent_tolerance() {
            BalanceStatus::GetsBack
        } else if amount < -cent_tolerance() {
            BalanceStatus::Owes
        } else {
            BalanceStatus::Settled
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BalanceStatus::GetsBack => "Gets Back",
            BalanceStatus::Owes => "Owes",
            BalanceStatus::Settled => "Settled",
        }
    }
}

/// One balance row for presentation or export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonBalance {
    /// Person ID
    pub person_id: PersonId,

    /// Net amount
    pub amount: Decimal,

    /// Standing relative to the cent tolerance
    pub status: BalanceStatus,
}

/// A suggested payment that reduces outstanding balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// Person who pays
    pub from: PersonId,

    /// Person who receives
    pub to: PersonId,

    /// Amount, rounded to cent precision (always > 0.01)
    pub amount: Decimal,
}
