//! Shareholder store for CSV storage
//!
//! Manages loading and saving the roster to cotistas.csv

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{Money, Roster, Shareholder};

use super::table::{from_table, load_table, save_table, to_table, Cell, Schema, TableRecord};

/// Column names of cotistas.csv, in order
pub const SHAREHOLDER_COLUMNS: [&str; 4] = ["Name", "TaxId", "Shares", "ValuePerShare"];

impl TableRecord for Shareholder {
    fn schema() -> Schema {
        Schema::new(SHAREHOLDER_COLUMNS)
    }

    fn from_row(row: &[Cell]) -> Self {
        let text = |i: usize| row.get(i).cloned().flatten().unwrap_or_default();
        let tax_id = text(1).trim().to_string();
        let shares = parse_shares(&tax_id, row.get(2));

        Self {
            name: text(0),
            tax_id,
            shares,
            value_per_share: parse_money_cell(row.get(3)),
        }
    }

    fn to_row(&self) -> Vec<Cell> {
        vec![
            Some(self.name.clone()),
            Some(self.tax_id.clone()),
            Some(self.shares.to_string()),
            Some(self.value_per_share.to_plain_string()),
        ]
    }
}

/// Parse a share count cell; accepts "10" and float renderings like "10.0"
fn parse_shares(tax_id: &str, cell: Option<&Cell>) -> u32 {
    let Some(raw) = cell.and_then(|c| c.as_deref()) else {
        return 0;
    };
    let raw = raw.trim();

    if let Ok(n) = raw.parse::<u32>() {
        return n;
    }

    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => {
            f as u32
        }
        _ => {
            debug!(tax_id, value = raw, "unparseable share count, using 0");
            0
        }
    }
}

/// Parse a money cell; null or malformed cells become zero
pub(crate) fn parse_money_cell(cell: Option<&Cell>) -> Money {
    match cell.and_then(|c| c.as_deref()) {
        None => Money::zero(),
        Some(raw) => Money::parse(raw).unwrap_or_else(|e| {
            debug!(error = %e, "unparseable amount, using 0");
            Money::zero()
        }),
    }
}

/// Store for the shareholder roster
#[derive(Debug, Clone)]
pub struct ShareholderStore {
    path: PathBuf,
}

impl ShareholderStore {
    /// Create a new shareholder store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roster; never fails (see `load_table`)
    pub fn load(&self) -> Roster {
        from_table::<Shareholder>(&load_table(&self.path, &Shareholder::schema()))
            .into_iter()
            .collect()
    }

    /// Load a roster from some other CSV file with the same schema
    pub fn load_from<P: AsRef<Path>>(path: P) -> Roster {
        from_table::<Shareholder>(&load_table(path, &Shareholder::schema()))
            .into_iter()
            .collect()
    }

    /// Rewrite the backing file with the full roster
    pub fn save(&self, roster: &Roster) -> LedgerResult<()> {
        save_table(&to_table(roster.rows()), &self.path)
    }
}
