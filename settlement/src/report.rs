//! Settlement report assembly
//!
//! Bundles balances, settlements, and summary statistics into one
//! value for presentation and export consumers, so they never have
//! to call the calculator and planner separately.

use crate::{
    balance::calculate_balances,
    planner::plan_settlements,
    types::{BalanceStatus, PersonBalance, Settlement},
    Result,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trip_core::Trip;

/// Summary statistics over one trip's settlement run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementStats {
    /// Number of participants
    pub person_count: usize,

    /// Number of logged expenses
    pub expense_count: usize,

    /// Sum of all expense amounts
    pub total_spent: Decimal,

    /// Number of suggested transfers
    pub transfer_count: usize,

    /// Sum of all suggested transfer amounts
    pub total_transferred: Decimal,

    /// Participants already within tolerance of zero
    pub settled_count: usize,
}

/// Computed results for one trip, ready for display or export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementReport {
    /// Balance rows in trip people order
    pub balances: Vec<PersonBalance>,

    /// Suggested transfers
    pub settlements: Vec<Settlement>,

    /// Summary statistics
    pub stats: SettlementStats,
}

impl SettlementReport {
    /// Compute balances and settlements for a trip
    pub fn build(trip: &Trip) -> Result<Self> {
        let balances = calculate_balances(trip)?;
        let settlements = plan_settlements(&balances);
        let rows = balances.rows();

        let stats = SettlementStats {
            person_count: trip.people.len(),
            expense_count: trip.expenses.len(),
            total_spent: trip.total_spent(),
            transfer_count: settlements.len(),
            total_transferred: settlements.iter().map(|s| s.amount).sum(),
            settled_count: rows
                .iter()
                .filter(|row| row.status == BalanceStatus::Settled)
                .count(),
        };

        Ok(Self {
            balances: rows,
            settlements,
            stats,
        })
    }
}
