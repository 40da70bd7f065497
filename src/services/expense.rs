//! Expense service
//!
//! Coordinates store mutations with persistence. Every add/remove writes
//! the full collection back to disk before returning. A failed write is
//! recorded in the diagnostic log and the in-memory state stays
//! authoritative for the rest of the session; the mutation is not rolled
//! back.

use chrono::NaiveDate;

use crate::diag::DiagLogger;
use crate::error::OutlayResult;
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Business logic for expense mutations and queries
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    diag: &'a DiagLogger,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage, diag: &'a DiagLogger) -> Self {
        Self { storage, diag }
    }

    /// Create and store a new expense, then persist the collection
    ///
    /// The amount is not validated; negative values are accepted as
    /// refunds or corrections.
    pub fn add_expense(
        &self,
        title: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: Category,
    ) -> OutlayResult<Expense> {
        let expense = Expense::new(title, amount, date, category);
        self.storage.expenses.insert(expense.clone())?;
        self.persist();
        Ok(expense)
    }

    /// Remove the identified expenses, then persist the collection
    ///
    /// Ids that are not present are skipped. Returns the number of
    /// records actually removed.
    pub fn remove_expenses(&self, ids: &[ExpenseId]) -> OutlayResult<usize> {
        let mut removed = 0;
        for &id in ids {
            if self.storage.expenses.remove(id)? {
                removed += 1;
            }
        }
        self.persist();
        Ok(removed)
    }

    /// All expenses, newest date first
    pub fn list(&self) -> OutlayResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Expenses in one category, newest date first
    pub fn list_by_category(&self, category: Category) -> OutlayResult<Vec<Expense>> {
        self.storage.expenses.get_by_category(category)
    }

    /// Change counter for re-render decisions
    pub fn version(&self) -> u64 {
        self.storage.expenses.version()
    }

    /// Write the collection to disk, swallowing failures
    ///
    /// The in-memory collection is the source of truth once a mutation
    /// has been applied; a write failure only loses durability, so it is
    /// logged and dropped rather than surfaced.
    fn persist(&self) {
        if let Err(e) = self.storage.expenses.save() {
            let _ = self.diag.error(format!("Failed to save expenses: {}", e));
        }
    }
}
