//! Export module for cotas
//!
//! CSV export of allocation reports, for spreadsheets.

pub mod csv;

pub use self::csv::{allocation_csv, ALLOCATION_COLUMNS};
