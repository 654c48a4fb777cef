//! Service layer for cotas
//!
//! The service layer provides business logic on top of the storage layer:
//! validation at the boundary, logging of persisted mutations, and the
//! allocation computation.

pub mod allocation;
pub mod cost;
pub mod shareholder;

pub use allocation::{allocate, AllocationLine, AllocationResult, AllocationService};
pub use cost::CostService;
pub use shareholder::{RosterSummary, ShareholderService};
