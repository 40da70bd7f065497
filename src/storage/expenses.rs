//! Expense store
//!
//! Holds the authoritative in-memory collection of expense records and
//! mirrors it to expenses.json. The on-disk format is a plain JSON array
//! of records.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::error::OutlayError;
use crate::models::{Category, Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// In-memory expense collection backed by a JSON file
///
/// The id map guarantees the no-duplicate-ids invariant. Read queries
/// return snapshots sorted by date descending; insertion order is not
/// meaningful. A version counter is bumped on every mutation so callers
/// can re-render when the collection changes.
pub struct ExpenseStore {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: category -> expense ids
    by_category: RwLock<HashMap<Category, Vec<ExpenseId>>>,
    version: AtomicU64,
}

impl ExpenseStore {
    /// Create a store backed by the given file; call `load` before use
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
            version: AtomicU64::new(0),
        }
    }

    /// Load records from disk and rebuild the category index
    ///
    /// A missing, corrupt, or schema-incompatible file resets the
    /// collection to empty; startup never fails on bad data.
    pub fn load(&self) -> Result<(), OutlayError> {
        let records: Vec<Expense> = read_json(&self.path).unwrap_or_default();

        let mut data = self.write_data()?;
        let mut by_category = self.write_index()?;

        data.clear();
        by_category.clear();

        for expense in records {
            by_category
                .entry(expense.category)
                .or_default()
                .push(expense.id);
            data.insert(expense.id, expense);
        }

        self.version.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Write the full collection to disk atomically
    pub fn save(&self) -> Result<(), OutlayError> {
        let data = self.read_data()?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        write_json_atomic(&self.path, &records)
    }

    /// Insert an expense (or replace one with the same id)
    pub fn insert(&self, expense: Expense) -> Result<(), OutlayError> {
        let mut data = self.write_data()?;
        let mut by_category = self.write_index()?;

        if let Some(old) = data.get(&expense.id) {
            if let Some(ids) = by_category.get_mut(&old.category) {
                ids.retain(|&id| id != expense.id);
            }
        }

        by_category
            .entry(expense.category)
            .or_default()
            .push(expense.id);
        data.insert(expense.id, expense);

        self.version.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Remove an expense; returns false when the id is absent (no-op)
    pub fn remove(&self, id: ExpenseId) -> Result<bool, OutlayError> {
        let mut data = self.write_data()?;
        let mut by_category = self.write_index()?;

        match data.remove(&id) {
            Some(expense) => {
                if let Some(ids) = by_category.get_mut(&expense.category) {
                    ids.retain(|&eid| eid != id);
                }
                self.version.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get a single expense by id
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, OutlayError> {
        Ok(self.read_data()?.get(&id).cloned())
    }

    /// All expenses, newest date first
    pub fn get_all(&self) -> Result<Vec<Expense>, OutlayError> {
        let data = self.read_data()?;
        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(records)
    }

    /// Expenses in one category, newest date first
    pub fn get_by_category(&self, category: Category) -> Result<Vec<Expense>, OutlayError> {
        let data = self.read_data()?;
        let by_category = self.read_index()?;

        let ids = by_category
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut records: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    /// Number of records in the collection
    pub fn count(&self) -> Result<usize, OutlayError> {
        Ok(self.read_data()?.len())
    }

    /// Monotonic change counter; bumped by load, insert, and remove
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    fn read_data(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<ExpenseId, Expense>>, OutlayError> {
        self.data
            .read()
            .map_err(|e| OutlayError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_data(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<ExpenseId, Expense>>, OutlayError> {
        self.data
            .write()
            .map_err(|e| OutlayError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn read_index(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<Category, Vec<ExpenseId>>>, OutlayError>
    {
        self.by_category
            .read()
            .map_err(|e| OutlayError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_index(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<Category, Vec<ExpenseId>>>, OutlayError>
    {
        self.by_category
            .write()
            .map_err(|e| OutlayError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
