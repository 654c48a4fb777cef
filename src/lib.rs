//! cotas - shareholder ledger and monthly cost allocation
//!
//! This library keeps the roster of shareholders (cotistas) of a shared
//! livestock venture and its operating costs, both as human-editable CSV
//! files, and splits each month's costs across shareholders in proportion to
//! their share count (the rateio).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (shareholders, cost entries, money, periods)
//! - `storage`: Schema-enforced CSV tables and the typed stores
//! - `services`: Business logic, including the allocation engine
//! - `display`: Plain-text tables for terminal output
//! - `export`: CSV export of allocation reports
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cotas::config::paths::LedgerPaths;
//! use cotas::models::Period;
//! use cotas::services::AllocationService;
//! use cotas::storage::Storage;
//!
//! let storage = Storage::new(LedgerPaths::new()?)?;
//! let result = AllocationService::new(&storage).allocate(Period::current());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::LedgerError;
