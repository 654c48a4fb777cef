//! Display formatting for terminal output
//!
//! Provides plain-text tables for the roster, the cost ledger and the
//! allocation report.

pub mod allocation;
pub mod cost;
pub mod shareholder;

pub use allocation::format_allocation;
pub use cost::{format_cost_centers, format_cost_entry, format_cost_list};
pub use shareholder::format_shareholder_list;
