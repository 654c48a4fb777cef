//! Cost entry model
//!
//! One operational expenditure booked against a cost center. Entries have no
//! identifier; two entries are the same entry when every field matches.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cost_center::CostCenter;
use super::money::Money;

/// Date formats accepted in the costs file, tried in order
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// The date cell of a cost row
///
/// Keeps the text exactly as persisted so hand-edited files survive a
/// load/save cycle, and parses it on demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryDate(String);

impl EntryDate {
    /// Wrap raw cell text
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Date in ISO form, as written for new entries
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// The persisted text
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Parse the cell; `None` when it is blank or in an unknown format
    pub fn parsed(&self) -> Option<NaiveDate> {
        parse_entry_date(&self.0)
    }
}

/// Dates are equal when their stored text matches, ignoring surrounding
/// whitespace; two spellings of the same day are different cells.
impl PartialEq for EntryDate {
    fn eq(&self, other: &Self) -> bool {
        self.0.trim() == other.0.trim()
    }
}

impl Eq for EntryDate {}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a date the way the costs file may contain it
pub fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// A single cost row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEntry {
    /// When the cost was incurred
    pub date: EntryDate,

    /// Cost center label as persisted
    pub cost_center: String,

    /// Free-text description
    pub description: String,

    /// Amount spent
    pub amount: Money,
}

impl CostEntry {
    /// Create a new cost entry for a known cost center
    pub fn new(
        date: NaiveDate,
        cost_center: CostCenter,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date: EntryDate::from_date(date),
            cost_center: cost_center.label().to_string(),
            description: description.into().trim().to_string(),
            amount,
        }
    }

    /// The typed cost center, if the label is one of the fixed set
    pub fn center(&self) -> Option<CostCenter> {
        CostCenter::parse(&self.cost_center)
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), CostValidationError> {
        if self.date.parsed().is_none() {
            return Err(CostValidationError::InvalidDate(self.date.raw().to_string()));
        }

        if !CostCenter::is_known_label(&self.cost_center) {
            return Err(CostValidationError::UnknownCostCenter(
                self.cost_center.clone(),
            ));
        }

        if self.amount.is_negative() {
            return Err(CostValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for CostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.cost_center, self.description, self.amount
        )
    }
}

/// Validation errors for cost entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostValidationError {
    InvalidDate(String),
    UnknownCostCenter(String),
    NegativeAmount(Money),
}

impl fmt::Display for CostValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(raw) => write!(f, "Invalid cost date: '{}'", raw),
            Self::UnknownCostCenter(label) => write!(f, "Unknown cost center: '{}'", label),
            Self::NegativeAmount(amount) => {
                write!(f, "Cost amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for CostValidationError {}
