//! Shareholder roster
//!
//! The shareholder table as an ordered value. Every operation returns a new
//! roster (or a new roster plus an outcome) and leaves persistence to the
//! caller.

use super::money::Money;
use super::shareholder::Shareholder;

/// Ordered shareholder table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    rows: Vec<Shareholder>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from rows, keeping their order
    pub fn from_rows(rows: Vec<Shareholder>) -> Self {
        Self { rows }
    }

    /// Rows in table order
    pub fn rows(&self) -> &[Shareholder] {
        &self.rows
    }

    /// Consume the roster into its rows
    pub fn into_rows(self) -> Vec<Shareholder> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the share counts; 0 for an empty roster
    pub fn total_shares(&self) -> u64 {
        self.rows.iter().map(|s| u64::from(s.shares)).sum()
    }

    /// Sum over rows of shares × value per share
    pub fn total_capital(&self) -> Money {
        self.rows.iter().map(Shareholder::capital).sum()
    }

    /// Look up a shareholder by tax id
    pub fn get(&self, tax_id: &str) -> Option<&Shareholder> {
        let tax_id = tax_id.trim();
        self.rows.iter().find(|s| s.tax_id == tax_id)
    }

    /// Check whether a tax id is present
    pub fn contains(&self, tax_id: &str) -> bool {
        self.get(tax_id).is_some()
    }

    /// Tax ids in table order
    pub fn tax_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|s| s.tax_id.as_str()).collect()
    }

    /// Insert or replace by tax id
    ///
    /// Any existing row with the same tax id is dropped and the record is
    /// appended at the end; other rows keep their relative order.
    pub fn upsert(mut self, record: Shareholder) -> Self {
        self.rows.retain(|s| s.tax_id != record.tax_id);
        self.rows.push(record);
        self
    }

    /// Remove every row with this tax id
    ///
    /// Returns the new roster and the number of rows removed. Removing an
    /// absent tax id is not an error.
    pub fn remove(mut self, tax_id: &str) -> (Self, usize) {
        let tax_id = tax_id.trim();
        let before = self.rows.len();
        self.rows.retain(|s| s.tax_id != tax_id);
        let removed = before - self.rows.len();
        (self, removed)
    }

    /// Replace the whole table
    ///
    /// No reconciliation by tax id is performed.
    pub fn replace_all(self, replacement: Roster) -> Self {
        replacement
    }

    /// Tax ids that appear on more than one row
    pub fn duplicate_tax_ids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut duplicates: Vec<&str> = Vec::new();
        for row in &self.rows {
            let id = row.tax_id.as_str();
            if seen.contains(&id) {
                if !duplicates.contains(&id) {
                    duplicates.push(id);
                }
            } else {
                seen.push(id);
            }
        }
        duplicates
    }
}

impl FromIterator<Shareholder> for Roster {
    fn from_iter<I: IntoIterator<Item = Shareholder>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
