//! Per-person contribution statistics
//!
//! Who fronted how much of the trip, independent of how expenses
//! were split. Pure read-only computation over a trip snapshot.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trip_core::{PersonId, Trip};

/// One person's share of the money actually paid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// Person ID
    pub person_id: PersonId,

    /// Display name
    pub name: String,

    /// Sum of expenses this person paid
    pub total_paid: Decimal,

    /// Number of expenses this person paid
    pub expense_count: usize,

    /// Percentage of the trip total this person fronted (0.0 - 100.0)
    pub share_of_total: f64,

    /// Average amount per paid expense
    pub average_expense: Decimal,
}

/// Contribution statistics per person, highest contributor first
///
/// Ties keep the trip's people order.
pub fn contributions(trip: &Trip) -> Vec<Contribution> {
    let total_spent = trip.total_spent();

    let mut rows: Vec<Contribution> = trip
        .people
        .iter()
        .map(|person| {
            let total_paid: Decimal = trip
                .expenses
                .iter()
                .filter(|e| e.paid_by == person.id)
                .map(|e| e.amount)
                .sum();
            let expense_count = trip
                .expenses
                .iter()
                .filter(|e| e.paid_by == person.id)
                .count();

            let share_of_total = if total_spent > Decimal::ZERO {
                (total_paid / total_spent * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            } else {
                0.0
            };

            let average_expense = if expense_count > 0 {
                total_paid / Decimal::from(expense_count as u64)
            } else {
                Decimal::ZERO
            };

            Contribution {
                person_id: person.id.clone(),
                name: person.name.clone(),
                total_paid,
                expense_count,
                share_of_total,
                average_expense,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total_paid.cmp(&a.total_paid));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use trip_core::{Expense, ExpenseId, Person, TripId};

    fn expense(amount: i64, paid_by: &str) -> Expense {
        Expense {
            id: ExpenseId::generate(),
            title: "Expense".to_string(),
            amount: Decimal::new(amount, 2),
            paid_by: PersonId::new(paid_by),
            split_among: vec![PersonId::new(paid_by)],
            custom_splits: None,
            date: Utc::now(),
        }
    }

    #[test]
    fn test_contributions_sorted_and_percentages() {
        let mut trip = Trip::new(TripId::new("t1"), "Goa");
        for id in ["alice", "bob", "carol"] {
            trip.people.push(Person {
                id: PersonId::new(id),
                name: id.to_string(),
            });
        }
        trip.expenses.push(expense(10000, "bob"));
        trip.expenses.push(expense(20000, "bob"));
        trip.expenses.push(expense(10000, "alice"));

        let rows = contributions(&trip);

        assert_eq!(rows[0].name, "bob");
        assert_eq!(rows[0].total_paid, Decimal::new(30000, 2));
        assert_eq!(rows[0].expense_count, 2);
        assert_eq!(rows[0].average_expense, Decimal::new(15000, 2));
        assert!((rows[0].share_of_total - 75.0).abs() < 1e-9);

        assert_eq!(rows[1].name, "alice");
        assert!((rows[1].share_of_total - 25.0).abs() < 1e-9);

        assert_eq!(rows[2].name, "carol");
        assert_eq!(rows[2].total_paid, Decimal::ZERO);
        assert_eq!(rows[2].share_of_total, 0.0);
        assert_eq!(rows[2].average_expense, Decimal::ZERO);

        let percent_sum: f64 = rows.iter().map(|r| r.share_of_total).sum();
        assert!((percent_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_contributions_with_no_expenses() {
        let mut trip = Trip::new(TripId::new("t1"), "Goa");
        trip.people.push(Person {
            id: PersonId::new("alice"),
            name: "Alice".to_string(),
        });

        let rows = contributions(&trip);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].share_of_total, 0.0);
    }
}
