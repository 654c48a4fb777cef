//! Storage layer for cotas
//!
//! Provides schema-enforced CSV tables with atomic writes, and the two typed
//! stores built on them.

pub mod costs;
pub mod init;
pub mod shareholders;
pub mod table;

pub use costs::{CostStore, COST_COLUMNS};
pub use init::initialize_storage;
pub use shareholders::{ShareholderStore, SHAREHOLDER_COLUMNS};
pub use table::{load_table, save_table, Schema, Table, TableRecord};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Bundles the two stores; each one is loaded and saved wholesale
pub struct Storage {
    paths: LedgerPaths,
    pub shareholders: ShareholderStore,
    pub costs: CostStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            shareholders: ShareholderStore::new(paths.shareholders_file()),
            costs: CostStore::new(paths.costs_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Check if settings and both data files exist
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized() && !init::needs_initialization(&self.paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(storage.shareholders.load().is_empty());
        assert!(storage.costs.load().is_empty());
    }

    #[test]
    fn test_initialized_requires_data_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        crate::config::Settings::default().save(&paths).unwrap();
        assert!(!storage.is_initialized());

        initialize_storage(&paths).unwrap();
        assert!(storage.is_initialized());
    }
}
