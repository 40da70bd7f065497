//! Expense record model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single expense record
///
/// The amount is intentionally unvalidated: negative values are accepted
/// and read as refunds or corrections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation and never reused
    pub id: ExpenseId,

    /// Free-text label, no uniqueness constraint
    pub title: String,

    /// Amount in cents
    pub amount: Money,

    /// Date of the expense, day granularity
    pub date: NaiveDate,

    /// Category from the fixed set
    pub category: Category,

    /// When the record was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            amount,
            date,
            category,
            created_at: Utc::now(),
        }
    }

    /// Whether this expense falls in the same calendar month and year as `reference`
    pub fn in_month_of(&self, reference: NaiveDate) -> bool {
        use chrono::Datelike;
        self.date.year() == reference.year() && self.date.month() == reference.month()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}, {})",
            self.id, self.title, self.amount, self.category, self.date
        )
    }
}
