//! Shareholder service
//!
//! Business logic for the shareholder registry: validated upserts, removal
//! by tax id, bulk replacement and totals.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Roster, Shareholder};
use crate::storage::{ShareholderStore, Storage};

/// Totals over the whole roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSummary {
    pub shareholder_count: usize,
    pub total_shares: u64,
    pub total_capital: Money,
}

impl RosterSummary {
    pub fn of(roster: &Roster) -> Self {
        Self {
            shareholder_count: roster.len(),
            total_shares: roster.total_shares(),
            total_capital: roster.total_capital(),
        }
    }
}

/// Service for shareholder management
pub struct ShareholderService<'a> {
    storage: &'a Storage,
}

impl<'a> ShareholderService<'a> {
    /// Create a new shareholder service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a shareholder, or replace the one with the same tax id
    pub fn upsert(
        &self,
        name: &str,
        tax_id: &str,
        shares: u32,
        value_per_share: Money,
    ) -> LedgerResult<Shareholder> {
        let shareholder = Shareholder::new(name, tax_id, shares, value_per_share);

        shareholder
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let roster = self.storage.shareholders.load();
        let replaced = roster.contains(&shareholder.tax_id);
        let roster = roster.upsert(shareholder.clone());
        self.storage.shareholders.save(&roster)?;

        info!(
            tax_id = %shareholder.tax_id,
            shares = shareholder.shares,
            replaced,
            "shareholder saved"
        );

        Ok(shareholder)
    }

    /// Get a shareholder by tax id
    pub fn get(&self, tax_id: &str) -> LedgerResult<Shareholder> {
        self.storage
            .shareholders
            .load()
            .get(tax_id)
            .cloned()
            .ok_or_else(|| LedgerError::shareholder_not_found(tax_id.trim()))
    }

    /// List all shareholders in table order
    pub fn list(&self) -> Roster {
        self.storage.shareholders.load()
    }

    /// Totals for the current roster
    pub fn summary(&self) -> RosterSummary {
        RosterSummary::of(&self.list())
    }

    /// Remove every row with this tax id
    ///
    /// Returns the number of rows removed. Nothing is written when the tax id
    /// is absent.
    pub fn remove(&self, tax_id: &str) -> LedgerResult<usize> {
        let (roster, removed) = self.storage.shareholders.load().remove(tax_id);

        if removed > 0 {
            self.storage.shareholders.save(&roster)?;
            info!(tax_id = tax_id.trim(), removed, "shareholder removed");
        }

        Ok(removed)
    }

    /// Replace the whole roster with the contents of another CSV file
    ///
    /// Rows are taken as-is; duplicated tax ids are only reported.
    pub fn replace_from<P: AsRef<Path>>(&self, source: P) -> LedgerResult<Roster> {
        let source = source.as_ref();
        if !source.exists() {
            return Err(LedgerError::NotFound {
                entity_type: "File",
                identifier: source.display().to_string(),
            });
        }

        self.replace(ShareholderStore::load_from(source))
    }

    /// Replace the whole roster
    pub fn replace(&self, replacement: Roster) -> LedgerResult<Roster> {
        let duplicates = replacement.duplicate_tax_ids();
        if !duplicates.is_empty() {
            warn!(
                duplicates = %duplicates.join(", "),
                "replacement roster contains duplicated tax ids"
            );
        }

        let roster = self.storage.shareholders.load().replace_all(replacement);
        self.storage.shareholders.save(&roster)?;
        info!(rows = roster.len(), "shareholder roster replaced");

        Ok(roster)
    }
}
