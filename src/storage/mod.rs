//! Storage layer for Outlay
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::OutlayPaths;
use crate::error::OutlayError;

/// Storage coordinator holding the expense store and path configuration
pub struct Storage {
    paths: OutlayPaths,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create the storage layer and ensure its directories exist
    pub fn new(paths: OutlayPaths) -> Result<Self, OutlayError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &OutlayPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), OutlayError> {
        self.expenses.load()
    }
}
