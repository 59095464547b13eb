//! Balance calculation
//!
//! Reduces a trip's expense list into a net balance per person:
//! the payer is credited the full amount, every participant is
//! debited their share. The reduction is commutative, so expense
//! order never affects the result.
//!
//! # Conservation
//!
//! Per expense, the credited amount equals the sum of the debits:
//! custom splits are validated to sum to the amount, and equal splits
//! divide it exactly up to decimal precision. Total balances
//! therefore sum to zero, up to drift far below the cent tolerance.

use crate::{types::Balances, Error, Result};
use rust_decimal::Decimal;
use trip_core::{ExpenseId, PersonId, Trip};

/// Compute net balances for a trip
///
/// Every current person appears in the result, even with zero
/// expenses. An expense referencing a person who is not in the trip
/// is rejected with [`Error::UnknownPerson`] rather than silently
/// producing an undefined balance.
pub fn calculate_balances(trip: &Trip) -> Result<Balances> {
    let mut balances = Balances::with_people(trip.people.iter().map(|p| p.id.clone()));

    for expense in &trip.expenses {
        apply(&mut balances, &expense.id, &expense.paid_by, expense.amount)?;

        match &expense.custom_splits {
            Some(splits) => {
                for (person, share) in splits {
                    apply(&mut balances, &expense.id, person, -*share)?;
                }
            }
            None => {
                if !expense.split_among.is_empty() {
                    let share =
                        expense.amount / Decimal::from(expense.split_among.len() as u64);
                    for person in &expense.split_among {
                        apply(&mut balances, &expense.id, person, -share)?;
                    }
                }
            }
        }
    }

    tracing::debug!(
        "Calculated balances for {} people over {} expenses",
        trip.people.len(),
        trip.expenses.len()
    );

    Ok(balances)
}

fn apply(
    balances: &mut Balances,
    expense_id: &ExpenseId,
    person: &PersonId,
    delta: Decimal,
) -> Result<()> {
    match balances.amount_mut(person) {
        Some(amount) => {
            *amount += delta;
            Ok(())
        }
        None => Err(Error::UnknownPerson {
            expense_id: expense_id.clone(),
            person_id: person.clone(),
        }),
    }
}
