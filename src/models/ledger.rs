//! Cost ledger
//!
//! The cost table as an ordered value, with the filtered view used to pick
//! entries and the full-row-equality removal applied to a selection.

use chrono::NaiveDate;

use super::cost::CostEntry;
use super::cost_center::{CostCenter, ALL_CENTERS};
use super::money::Money;

/// Ordered cost table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostLedger {
    rows: Vec<CostEntry>,
}

/// Predicates for narrowing the ledger
///
/// Every predicate that is set must hold (logical AND); unset predicates
/// pass everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostFilter {
    /// Case-insensitive substring of the description
    pub description_contains: Option<String>,
    /// Exact calendar date
    pub date: Option<NaiveDate>,
    /// Exact cost center label
    pub cost_center: Option<String>,
}

impl CostFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by description substring; a blank needle clears the predicate
    pub fn description(mut self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.description_contains = if needle.trim().is_empty() {
            None
        } else {
            Some(needle)
        };
        self
    }

    /// Filter by exact date
    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Filter by cost center
    ///
    /// The "Todos"/"All" sentinel and blank input clear the predicate. Known
    /// slugs are normalized to their persisted label.
    pub fn center(mut self, center: impl AsRef<str>) -> Self {
        let center = center.as_ref().trim();
        self.cost_center = if center.is_empty()
            || center.eq_ignore_ascii_case(ALL_CENTERS)
            || center.eq_ignore_ascii_case("all")
        {
            None
        } else {
            Some(
                CostCenter::parse(center)
                    .map(|c| c.label().to_string())
                    .unwrap_or_else(|| center.to_string()),
            )
        };
        self
    }

    /// Whether no predicate is set
    pub fn is_empty(&self) -> bool {
        self.description_contains.is_none() && self.date.is_none() && self.cost_center.is_none()
    }

    /// Check a single entry against every set predicate
    pub fn matches(&self, entry: &CostEntry) -> bool {
        if let Some(needle) = &self.description_contains {
            if !entry
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(date) = self.date {
            if entry.date.parsed() != Some(date) {
                return false;
            }
        }

        if let Some(center) = &self.cost_center {
            if entry.cost_center.trim() != center {
                return false;
            }
        }

        true
    }
}

/// Result of a bulk removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The selection was empty; the ledger is unchanged
    NothingSelected,
    /// Rows equal to a selected row were removed (possibly none)
    Removed { count: usize },
}

impl CostLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from rows, keeping their order
    pub fn from_rows(rows: Vec<CostEntry>) -> Self {
        Self { rows }
    }

    /// Rows in table order
    pub fn rows(&self) -> &[CostEntry] {
        &self.rows
    }

    /// Consume the ledger into its rows
    pub fn into_rows(self) -> Vec<CostEntry> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of every amount in the ledger
    pub fn total(&self) -> Money {
        self.rows.iter().map(|e| e.amount).sum()
    }

    /// Append an entry; duplicates are allowed
    pub fn append(mut self, entry: CostEntry) -> Self {
        self.rows.push(entry);
        self
    }

    /// Entries matching the filter, in table order
    pub fn filter(&self, filter: &CostFilter) -> CostLedger {
        self.rows
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Remove every row equal (all columns) to a row of the selection
    ///
    /// Field-identical duplicates are removed together.
    pub fn remove_matching(mut self, selection: &[CostEntry]) -> (Self, RemovalOutcome) {
        if selection.is_empty() {
            return (self, RemovalOutcome::NothingSelected);
        }

        let before = self.rows.len();
        self.rows.retain(|row| !selection.contains(row));
        let count = before - self.rows.len();
        (self, RemovalOutcome::Removed { count })
    }

    /// Distinct non-empty cost center labels present in the ledger, sorted
    pub fn centers_in_use(&self) -> Vec<String> {
        let mut centers: Vec<String> = self
            .rows
            .iter()
            .map(|e| e.cost_center.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        centers.sort();
        centers.dedup();
        centers
    }
}

impl FromIterator<CostEntry> for CostLedger {
    fn from_iter<I: IntoIterator<Item = CostEntry>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
