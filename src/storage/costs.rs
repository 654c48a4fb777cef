//! Cost store for CSV storage
//!
//! Manages loading and saving the cost ledger to custos.csv

use std::path::{Path, PathBuf};

use crate::error::LedgerResult;
use crate::models::{CostEntry, CostLedger, EntryDate};

use super::shareholders::parse_money_cell;
use super::table::{from_table, load_table, save_table, to_table, Cell, Schema, TableRecord};

/// Column names of custos.csv, in order
pub const COST_COLUMNS: [&str; 4] = ["Date", "CostCenter", "Description", "Amount"];

impl TableRecord for CostEntry {
    fn schema() -> Schema {
        Schema::new(COST_COLUMNS)
    }

    fn from_row(row: &[Cell]) -> Self {
        let text = |i: usize| row.get(i).cloned().flatten().unwrap_or_default();

        Self {
            date: EntryDate::from_raw(text(0)),
            cost_center: text(1),
            description: text(2),
            amount: parse_money_cell(row.get(3)),
        }
    }

    fn to_row(&self) -> Vec<Cell> {
        vec![
            Some(self.date.raw().to_string()),
            Some(self.cost_center.clone()),
            Some(self.description.clone()),
            Some(self.amount.to_plain_string()),
        ]
    }
}

/// Store for the cost ledger
#[derive(Debug, Clone)]
pub struct CostStore {
    path: PathBuf,
}

impl CostStore {
    /// Create a new cost store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger; never fails (see `load_table`)
    pub fn load(&self) -> CostLedger {
        from_table::<CostEntry>(&load_table(&self.path, &CostEntry::schema()))
            .into_iter()
            .collect()
    }

    /// Rewrite the backing file with the full ledger
    pub fn save(&self, ledger: &CostLedger) -> LedgerResult<()> {
        save_table(&to_table(ledger.rows()), &self.path)
    }
}
