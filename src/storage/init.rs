//! Storage initialization
//!
//! Handles first-run setup: directories and header-only CSV files.

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{CostLedger, Roster};

use super::costs::CostStore;
use super::shareholders::ShareholderStore;

/// Initialize storage for a fresh installation
///
/// Existing data files are left untouched.
pub fn initialize_storage(paths: &LedgerPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    if !paths.shareholders_file().exists() {
        ShareholderStore::new(paths.shareholders_file()).save(&Roster::new())?;
    }

    if !paths.costs_file().exists() {
        CostStore::new(paths.costs_file()).save(&CostLedger::new())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &LedgerPaths) -> bool {
    !paths.shareholders_file().exists() || !paths.costs_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Shareholder};
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();
        assert!(!needs_initialization(&paths));

        let header = std::fs::read_to_string(paths.costs_file()).unwrap();
        assert_eq!(header.trim_end(), "Date,CostCenter,Description,Amount");
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let store = ShareholderStore::new(paths.shareholders_file());
        let roster = Roster::new().upsert(Shareholder::new("Ana", "111", 1, Money::zero()));
        store.save(&roster).unwrap();

        initialize_storage(&paths).unwrap();
        assert_eq!(store.load(), roster);
    }
}
