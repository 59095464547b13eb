//! Settlement Engine
//!
//! Balance and settlement computation for group expense sharing.
//!
//! # Architecture
//!
//! Two pure functions form the core, and data flows one direction:
//!
//! 1. **Balance calculation**: reduce a trip's expenses into a net
//!    balance per person (positive = owed money, negative = owes)
//! 2. **Settlement planning**: match debtors against creditors with a
//!    greedy two-cursor walk, largest debt against largest credit,
//!    emitting cent-rounded transfers that zero everyone out
//!
//! Both are stateless and side-effect free: they read a `&Trip`
//! snapshot and allocate fresh results, so they can be called on
//! every render without caching.
//!
//! # Example
//!
//! ```no_run
//! use settlement::SettlementReport;
//! use trip_core::{Config, TripStore};
//!
//! fn main() -> settlement::Result<()> {
//!     let store = TripStore::open(&Config::default())?;
//!     for trip in store.trips() {
//!         let report = SettlementReport::build(trip)?;
//!         println!(
//!             "{}: {} transfers settle {} people",
//!             trip.name,
//!             report.stats.transfer_count,
//!             report.stats.person_count
//!         );
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod balance;
pub mod contributions;
pub mod error;
pub mod export;
pub mod planner;
pub mod report;
pub mod types;

// Re-exports
pub use balance::calculate_balances;
pub use contributions::{contributions, Contribution};
pub use error::{Error, Result};
pub use planner::{calculate_settlements, plan_settlements, SettlementPlanner};
pub use report::{SettlementReport, SettlementStats};
pub use types::{cent_tolerance, BalanceStatus, Balances, PersonBalance, Settlement};
