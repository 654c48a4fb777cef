//! Allocation engine
//!
//! Splits a month's costs across shareholders in proportion to their share
//! count. `allocate` is a pure function over table values;
//! `AllocationService` loads both stores and calls it.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{CostLedger, Money, Period, Roster};
use crate::storage::Storage;

/// Amount owed by one shareholder for the period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationLine {
    pub name: String,
    pub tax_id: String,
    pub shares: u32,
    pub owed: Money,
}

/// Result of allocating one period's costs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationResult {
    pub period: Period,
    /// One line per roster row, in roster order
    pub lines: Vec<AllocationLine>,
    /// Sum of the amounts dated inside the period
    pub total_costs: Money,
    /// Unrounded cost per share
    pub per_share_value: Decimal,
    /// Number of cost entries dated inside the period
    pub entry_count: usize,
}

impl AllocationResult {
    /// An empty result for a period
    pub fn empty(period: Period) -> Self {
        Self {
            period,
            lines: Vec::new(),
            total_costs: Money::zero(),
            per_share_value: Decimal::ZERO,
            entry_count: 0,
        }
    }

    /// True when there is nothing to show for the period
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of the owed amounts; may differ from `total_costs` by rounding
    pub fn total_owed(&self) -> Money {
        self.lines.iter().map(|l| l.owed).sum()
    }
}

/// Allocate the costs of `period` across the roster
///
/// Entries whose date does not parse are ignored. When the roster holds no
/// shares the per-share value is zero. When either table is empty the result
/// is empty.
pub fn allocate(roster: &Roster, costs: &CostLedger, period: Period) -> AllocationResult {
    if roster.is_empty() || costs.is_empty() {
        return AllocationResult::empty(period);
    }

    let in_period: Vec<Money> = costs
        .rows()
        .iter()
        .filter(|e| e.date.parsed().is_some_and(|d| period.contains(d)))
        .map(|e| e.amount)
        .collect();

    let total_costs: Money = in_period.iter().copied().sum();
    let total_shares = roster.total_shares();

    let per_share_value = if total_shares == 0 {
        Decimal::ZERO
    } else {
        total_costs
            .to_decimal()
            .checked_div(Decimal::from(total_shares))
            .unwrap_or(Decimal::ZERO)
    };

    let lines = roster
        .rows()
        .iter()
        .map(|s| AllocationLine {
            name: s.name.clone(),
            tax_id: s.tax_id.clone(),
            shares: s.shares,
            owed: per_share_value
                .checked_mul(Decimal::from(s.shares))
                .map(Money::from_decimal)
                .unwrap_or_default(),
        })
        .collect();

    debug!(
        %period,
        entries = in_period.len(),
        total = %total_costs.to_plain_string(),
        total_shares,
        per_share = %per_share_value,
        "allocation computed"
    );

    AllocationResult {
        period,
        lines,
        total_costs,
        per_share_value,
        entry_count: in_period.len(),
    }
}

/// Service for cost allocation
pub struct AllocationService<'a> {
    storage: &'a Storage,
}

impl<'a> AllocationService<'a> {
    /// Create a new allocation service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Allocate the stored costs of `period` across the stored roster
    pub fn allocate(&self, period: Period) -> AllocationResult {
        allocate(
            &self.storage.shareholders.load(),
            &self.storage.costs.load(),
            period,
        )
    }
}
