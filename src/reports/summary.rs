//! Spending aggregation
//!
//! Pure, read-only queries over a snapshot of the expense collection.
//! Everything here is a linear scan, which is fine at personal-tracking
//! scale.

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money};

/// Sum of all amounts; zero for an empty collection
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts whose date falls in the same calendar month and year
/// as `reference`
pub fn monthly_total(expenses: &[Expense], reference: NaiveDate) -> Money {
    expenses
        .iter()
        .filter(|e| e.in_month_of(reference))
        .map(|e| e.amount)
        .sum()
}

/// Sum of amounts in one category
pub fn category_total(expenses: &[Expense], category: Category) -> Money {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// Share of one category in the overall total, as a percentage
///
/// Zero when the overall total is zero.
pub fn category_percentage(expenses: &[Expense], category: Category) -> f64 {
    let overall = total(expenses);
    if overall.is_zero() {
        0.0
    } else {
        category_total(expenses, category).ratio(overall) * 100.0
    }
}

/// Per-category slice of the summary
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total: Money,
    pub count: usize,
    pub percentage: f64,
}

/// Spending summary across all five categories
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    /// Overall total across the collection
    pub total: Money,
    /// One row per category, in display order, zero rows included
    pub rows: Vec<CategoryBreakdown>,
}

impl SpendingSummary {
    /// Build the summary from a snapshot of the collection
    pub fn generate(expenses: &[Expense]) -> Self {
        let overall = total(expenses);

        let rows = Category::ALL
            .into_iter()
            .map(|category| {
                let cat_total = category_total(expenses, category);
                let count = expenses.iter().filter(|e| e.category == category).count();
                let percentage = if overall.is_zero() {
                    0.0
                } else {
                    cat_total.ratio(overall) * 100.0
                };
                CategoryBreakdown {
                    category,
                    total: cat_total,
                    count,
                    percentage,
                }
            })
            .collect();

        Self {
            total: overall,
            rows,
        }
    }
}
