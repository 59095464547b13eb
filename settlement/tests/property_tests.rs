//! Property-based tests for settlement invariants
//!
//! These tests use proptest to verify the core correctness
//! properties over generated well-formed trips:
//! - Zero sum: balances always total zero
//! - Order independence: permuting expenses never changes balances
//! - Round trip: applying the planned transfers settles everyone
//! - Positivity: every transfer is > 0.01 and never self-directed

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use settlement::{calculate_balances, cent_tolerance, plan_settlements};
use std::collections::HashMap;
use trip_core::{Expense, ExpenseId, Person, PersonId, Trip, TripId};

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn person_id(index: usize) -> PersonId {
    PersonId::new(format!("p{}", index))
}

/// Strategy for one expense among `people_count` people
///
/// Generated expenses are well-formed by construction: the payer and
/// every participant are trip members, custom splits cover exactly
/// the participant set and sum to the amount, and equal splits use
/// amounts divisible by the participant count so balances stay
/// cent-exact.
fn expense_strategy(people_count: usize) -> BoxedStrategy<Expense> {
    let indices: Vec<usize> = (0..people_count).collect();

    (
        0..people_count,
        proptest::sample::subsequence(indices, 1..=people_count),
        any::<bool>(),
    )
        .prop_flat_map(move |(payer, participants, custom)| {
            if custom {
                proptest::collection::vec(1i64..100_000, participants.len())
                    .prop_map(move |shares| {
                        let amount: i64 = shares.iter().sum();
                        let split_among: Vec<PersonId> =
                            participants.iter().map(|&i| person_id(i)).collect();
                        let custom_splits: HashMap<PersonId, Decimal> = participants
                            .iter()
                            .zip(&shares)
                            .map(|(&i, &share)| (person_id(i), cents(share)))
                            .collect();

                        Expense {
                            id: ExpenseId::new("pending"),
                            title: "Expense".to_string(),
                            amount: cents(amount),
                            paid_by: person_id(payer),
                            split_among,
                            custom_splits: Some(custom_splits),
                            date: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
                        }
                    })
                    .boxed()
            } else {
                (1i64..100_000)
                    .prop_map(move |per_head| {
                        let split_among: Vec<PersonId> =
                            participants.iter().map(|&i| person_id(i)).collect();
                        let amount = per_head * split_among.len() as i64;

                        Expense {
                            id: ExpenseId::new("pending"),
                            title: "Expense".to_string(),
                            amount: cents(amount),
                            paid_by: person_id(payer),
                            split_among,
                            custom_splits: None,
                            date: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
                        }
                    })
                    .boxed()
            }
        })
        .boxed()
}

/// Strategy for a well-formed trip
fn trip_strategy() -> impl Strategy<Value = Trip> {
    (2usize..=6).prop_flat_map(|people_count| {
        proptest::collection::vec(expense_strategy(people_count), 0..12).prop_map(
            move |expenses| {
                let people: Vec<Person> = (0..people_count)
                    .map(|i| Person {
                        id: person_id(i),
                        name: format!("Person {}", i),
                    })
                    .collect();
                let expenses: Vec<Expense> = expenses
                    .into_iter()
                    .enumerate()
                    .map(|(i, mut expense)| {
                        expense.id = ExpenseId::new(format!("e{}", i));
                        expense
                    })
                    .collect();

                Trip {
                    id: TripId::new("trip"),
                    name: "Generated".to_string(),
                    people,
                    expenses,
                    created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
                }
            },
        )
    })
}

/// Strategy for a trip plus a permutation of its expenses
fn permuted_trip_strategy() -> impl Strategy<Value = (Trip, Trip)> {
    trip_strategy().prop_flat_map(|trip| {
        let shuffled = Just(trip.expenses.clone()).prop_shuffle();
        (Just(trip), shuffled).prop_map(|(trip, expenses)| {
            let mut permuted = trip.clone();
            permuted.expenses = expenses;
            (trip, permuted)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: balances always sum to zero
    #[test]
    fn prop_balances_sum_to_zero(trip in trip_strategy()) {
        let balances = calculate_balances(&trip).unwrap();
        prop_assert!(balances.total().abs() < Decimal::new(1, 9));
    }

    /// Property: every person appears, even with no expenses
    #[test]
    fn prop_every_person_has_a_balance(trip in trip_strategy()) {
        let balances = calculate_balances(&trip).unwrap();
        prop_assert_eq!(balances.len(), trip.people.len());
        for person in &trip.people {
            prop_assert!(balances.get(&person.id).is_some());
        }
    }

    /// Property: expense order never affects balances
    #[test]
    fn prop_expense_order_is_irrelevant((trip, permuted) in permuted_trip_strategy()) {
        let original = calculate_balances(&trip).unwrap();
        let reordered = calculate_balances(&permuted).unwrap();

        for person in &trip.people {
            let a = original.get(&person.id).unwrap();
            let b = reordered.get(&person.id).unwrap();
            prop_assert!((a - b).abs() < Decimal::new(1, 9));
        }
    }

    /// Property: applying the planned transfers settles every balance
    ///
    /// Residual "dust" balances in (0, 0.01] sit below the planner's
    /// tolerance and are deliberately left unsettled, so trips that
    /// produce them are excluded here.
    #[test]
    fn prop_settlements_zero_out_balances(trip in trip_strategy()) {
        let balances = calculate_balances(&trip).unwrap();
        prop_assume!(balances
            .iter()
            .all(|(_, amount)| amount.is_zero() || amount.abs() > cent_tolerance()));

        let settlements = plan_settlements(&balances);

        let mut remaining: HashMap<PersonId, Decimal> = balances
            .iter()
            .map(|(person, amount)| (person.clone(), amount))
            .collect();
        for settlement in &settlements {
            *remaining.get_mut(&settlement.from).unwrap() += settlement.amount;
            *remaining.get_mut(&settlement.to).unwrap() -= settlement.amount;
        }

        for (person, amount) in &remaining {
            prop_assert!(
                amount.abs() <= cent_tolerance(),
                "{} left with residual balance {}",
                person,
                amount
            );
        }
    }

    /// Property: transfers are positive, above tolerance, and never
    /// self-directed
    #[test]
    fn prop_settlement_amounts_positive(trip in trip_strategy()) {
        let settlements = plan_settlements(&calculate_balances(&trip).unwrap());

        for settlement in &settlements {
            prop_assert!(settlement.amount > cent_tolerance());
            prop_assert_ne!(&settlement.from, &settlement.to);
        }
    }
}
