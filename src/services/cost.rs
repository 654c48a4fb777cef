//! Cost service
//!
//! Business logic for the cost ledger: recording entries, filtered views and
//! removal of a filtered selection.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CostCenter, CostEntry, CostFilter, CostLedger, Money, RemovalOutcome};
use crate::storage::Storage;

/// Service for cost management
pub struct CostService<'a> {
    storage: &'a Storage,
}

impl<'a> CostService<'a> {
    /// Create a new cost service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new cost entry
    ///
    /// `center` accepts a label or a slug. The date defaults to today.
    pub fn record(
        &self,
        date: Option<NaiveDate>,
        center: &str,
        description: &str,
        amount: Money,
    ) -> LedgerResult<CostEntry> {
        let center = CostCenter::parse(center).ok_or_else(|| {
            LedgerError::Validation(format!("Unknown cost center: {}", center.trim()))
        })?;

        if !amount.is_positive() {
            return Err(LedgerError::Validation(
                "Cost amount must be greater than zero".into(),
            ));
        }

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let entry = CostEntry::new(date, center, description, amount);

        entry
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let ledger = self.storage.costs.load().append(entry.clone());
        self.storage.costs.save(&ledger)?;

        info!(
            date = %entry.date,
            center = %entry.cost_center,
            amount = %entry.amount.to_plain_string(),
            "cost recorded"
        );

        Ok(entry)
    }

    /// Entries matching the filter, in table order
    pub fn list(&self, filter: &CostFilter) -> CostLedger {
        self.storage.costs.load().filter(filter)
    }

    /// Remove every row equal to a row of the selection
    pub fn remove_matching(&self, selection: &[CostEntry]) -> LedgerResult<RemovalOutcome> {
        let (ledger, outcome) = self.storage.costs.load().remove_matching(selection);

        if let RemovalOutcome::Removed { count } = outcome {
            if count > 0 {
                self.storage.costs.save(&ledger)?;
                info!(count, "cost entries removed");
            }
        }

        Ok(outcome)
    }

    /// Remove the rows matching a filter
    pub fn remove_filtered(&self, filter: &CostFilter) -> LedgerResult<RemovalOutcome> {
        let selection = self.list(filter);
        self.remove_matching(selection.rows())
    }

    /// Cost center labels present in the ledger, sorted
    pub fn centers_in_use(&self) -> Vec<String> {
        self.storage.costs.load().centers_in_use()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 3, d)
    }

    #[test]
    fn test_record_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let entry = service
            .record(day(5), "feed", "Feed purchase", Money::from_cents(12000))
            .unwrap();
        assert_eq!(entry.cost_center, "Alimentação");
        assert_eq!(entry.date.raw(), "2024-03-05");

        service
            .record(day(6), "Veterinário", "Vet visit", Money::from_cents(18000))
            .unwrap();

        let all = service.list(&CostFilter::new());
        assert_eq!(all.len(), 2);
        assert_eq!(all.total(), Money::from_cents(30000));
    }

    #[test]
    fn test_record_defaults_to_today() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let entry = service
            .record(None, "salt", "", Money::from_cents(100))
            .unwrap();
        assert_eq!(entry.date.parsed(), Some(Local::now().date_naive()));
    }

    #[test]
    fn test_record_rejects_zero_and_unknown_center() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        assert!(service
            .record(day(1), "salt", "", Money::zero())
            .unwrap_err()
            .is_validation());
        assert!(service
            .record(day(1), "Gasolina", "", Money::from_cents(100))
            .unwrap_err()
            .is_validation());

        assert!(service.list(&CostFilter::new()).is_empty());
    }

    #[test]
    fn test_list_with_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        service
            .record(day(5), "feed", "Feed purchase", Money::from_cents(12000))
            .unwrap();
        service
            .record(day(6), "veterinary", "Vet visit", Money::from_cents(18000))
            .unwrap();

        let by_description = service.list(&CostFilter::new().description("feed"));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description.rows()[0].description, "Feed purchase");

        let by_center = service.list(&CostFilter::new().center("Veterinário"));
        assert_eq!(by_center.len(), 1);

        let by_date = service.list(&CostFilter::new().date(day(6)).center("Todos"));
        assert_eq!(by_date.rows()[0].description, "Vet visit");
    }

    #[test]
    fn test_remove_filtered() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        service
            .record(day(5), "feed", "Ração", Money::from_cents(100))
            .unwrap();
        service
            .record(day(5), "feed", "Ração", Money::from_cents(100))
            .unwrap();
        service
            .record(day(7), "salt", "Sal mineral", Money::from_cents(300))
            .unwrap();

        let outcome = service
            .remove_filtered(&CostFilter::new().center("feed"))
            .unwrap();
        assert_eq!(outcome, RemovalOutcome::Removed { count: 2 });

        let remaining = service.list(&CostFilter::new());
        assert_eq!(remaining.len(), 1);
        assert_eq!(service.centers_in_use(), vec!["Sal".to_string()]);
    }

    #[test]
    fn test_remove_empty_selection() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        service
            .record(day(5), "feed", "Ração", Money::from_cents(100))
            .unwrap();

        let outcome = service
            .remove_filtered(&CostFilter::new().description("nothing like this"))
            .unwrap();
        assert_eq!(outcome, RemovalOutcome::NothingSelected);
        assert_eq!(service.list(&CostFilter::new()).len(), 1);
    }
}
