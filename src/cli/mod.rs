//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod allocation;
pub mod cost;
pub mod shareholder;

pub use allocation::{handle_allocation_command, AllocationArgs};
pub use cost::{handle_cost_command, CostCommands};
pub use shareholder::{handle_shareholder_command, ShareholderCommands};
