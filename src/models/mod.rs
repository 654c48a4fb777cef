//! Core data models for cotas
//!
//! This module contains the data structures of the ledger domain:
//! shareholders and their roster, cost entries and the cost ledger, money
//! and allocation periods.

pub mod cost;
pub mod cost_center;
pub mod ledger;
pub mod money;
pub mod period;
pub mod roster;
pub mod shareholder;

pub use cost::{parse_entry_date, CostEntry, EntryDate};
pub use cost_center::{CostCenter, ALL_CENTERS};
pub use ledger::{CostFilter, CostLedger, RemovalOutcome};
pub use money::Money;
pub use period::Period;
pub use roster::Roster;
pub use shareholder::Shareholder;
