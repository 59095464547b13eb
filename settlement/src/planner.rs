//! Settlement planning
//!
//! Turns net balances into a short list of pairwise transfers that
//! zero everyone out.
//!
//! # Algorithm
//!
//! 1. Partition people into debtors (balance < 0) and creditors
//!    (balance > 0); anyone within a cent of zero is already settled
//! 2. Sort debtors most-negative first and creditors most-positive
//!    first, so the largest debt is matched against the largest
//!    credit
//! 3. Walk both lists with a cursor each: transfer
//!    `min(-debt, credit)`, advance whichever side reaches zero
//!
//! # Example
//!
//! ```text
//! Balances:
//!   Alice: +200    Bob: -100    Carol: -100
//!
//! Transfers:
//!   Bob   pays Alice 100
//!   Carol pays Alice 100
//! ```
//!
//! Greedy matching keeps the transfer count small for typical group
//! sizes but is a heuristic, not a provably minimal solution; an
//! optimal matcher would need subset-sum search and the pairings it
//! picks would differ from what users already see.

use crate::{
    balance::calculate_balances,
    types::{cent_tolerance, Balances, Settlement},
    Result,
};
use rust_decimal::{Decimal, RoundingStrategy};
use trip_core::{PersonId, Trip};

/// Greedy settlement planner
pub struct SettlementPlanner {
    /// Balances within this tolerance of zero count as settled
    tolerance: Decimal,
}

impl Default for SettlementPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlementPlanner {
    /// Create a planner with the standard cent tolerance
    pub fn new() -> Self {
        Self {
            tolerance: cent_tolerance(),
        }
    }

    /// Derive the transfers that settle the given balances
    ///
    /// Emitted amounts are rounded to cent precision and are always
    /// strictly greater than the tolerance; near-zero transfers
    /// caused by floating drift are suppressed.
    pub fn plan(&self, balances: &Balances) -> Vec<Settlement> {
        let mut debtors: Vec<(PersonId, Decimal)> = balances
            .iter()
            .filter(|(_, amount)| *amount < -self.tolerance)
            .map(|(person, amount)| (person.clone(), amount))
            .collect();

        let mut creditors: Vec<(PersonId, Decimal)> = balances
            .iter()
            .filter(|(_, amount)| *amount > self.tolerance)
            .map(|(person, amount)| (person.clone(), amount))
            .collect();

        // Largest debt against largest credit first; both sorts are
        // stable, so ties keep the trip's people order
        debtors.sort_by(|a, b| a.1.cmp(&b.1));
        creditors.sort_by(|a, b| b.1.cmp(&a.1));

        let mut settlements = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < debtors.len() && j < creditors.len() {
            let owed = -debtors[i].1;
            let credit = creditors[j].1;
            let amount = owed.min(credit);

            if amount > self.tolerance {
                settlements.push(Settlement {
                    from: debtors[i].0.clone(),
                    to: creditors[j].0.clone(),
                    amount: amount
                        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                });
            }

            // Working copies only; the caller's balances are untouched
            debtors[i].1 += amount;
            creditors[j].1 -= amount;

            if debtors[i].1.abs() < self.tolerance {
                i += 1;
            }
            if creditors[j].1.abs() < self.tolerance {
                j += 1;
            }
        }

        tracing::debug!(
            "Planned {} transfers for {} debtors and {} creditors",
            settlements.len(),
            debtors.len(),
            creditors.len()
        );

        settlements
    }
}

/// Derive settlements from precomputed balances
pub fn plan_settlements(balances: &Balances) -> Vec<Settlement> {
    SettlementPlanner::new().plan(balances)
}

/// Compute balances and derive settlements in one step
pub fn calculate_settlements(trip: &Trip) -> Result<Vec<Settlement>> {
    Ok(plan_settlements(&calculate_balances(trip)?))
}
