//! Budget service
//!
//! Compares current-month spending against the optional limit from the
//! settings. The limit is only ever a display comparison, never a hard
//! constraint on mutations.

use chrono::NaiveDate;

use crate::config::{OutlayPaths, Settings};
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Expense, Money};
use crate::reports::monthly_total;
use crate::storage::Storage;

/// Snapshot of the budget comparison for one month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// The configured limit, if any
    pub limit: Option<Money>,
    /// Spending in the reference month
    pub spent: Money,
    /// min(spent / limit, 1.0) when the limit is set and positive, else 0
    pub progress: f64,
    /// True only when a limit is set and spending strictly exceeds it
    pub over_budget: bool,
}

impl BudgetStatus {
    /// Compute the status from a collection snapshot
    pub fn compute(expenses: &[Expense], limit: Option<Money>, reference: NaiveDate) -> Self {
        let spent = monthly_total(expenses, reference);

        let progress = match limit {
            Some(limit) if limit.is_positive() => spent.ratio(limit).min(1.0),
            _ => 0.0,
        };
        let over_budget = matches!(limit, Some(limit) if spent > limit);

        Self {
            limit,
            spent,
            progress,
            over_budget,
        }
    }
}

/// Budget configuration and comparison operations
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly limit and write the settings back
    pub fn set_limit(
        &self,
        settings: &mut Settings,
        paths: &OutlayPaths,
        limit: Money,
    ) -> OutlayResult<()> {
        if limit.is_negative() {
            return Err(OutlayError::Validation(
                "Monthly limit cannot be negative".into(),
            ));
        }
        settings.monthly_limit = Some(limit);
        settings.save(paths)
    }

    /// Clear the monthly limit and write the settings back
    pub fn clear_limit(&self, settings: &mut Settings, paths: &OutlayPaths) -> OutlayResult<()> {
        settings.monthly_limit = None;
        settings.save(paths)
    }

    /// Budget status for the month containing `reference`
    pub fn status(&self, settings: &Settings, reference: NaiveDate) -> OutlayResult<BudgetStatus> {
        let expenses = self.storage.expenses.get_all()?;
        Ok(BudgetStatus::compute(
            &expenses,
            settings.monthly_limit,
            reference,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(cents: i64, d: NaiveDate) -> Expense {
        Expense::new("test", Money::from_cents(cents), d, Category::Food)
    }

    #[test]
    fn test_no_limit_means_never_over_budget() {
        let expenses = vec![expense(1_000_000, date(2024, 5, 1))];
        let status = BudgetStatus::compute(&expenses, None, date(2024, 5, 15));

        assert!(!status.over_budget);
        assert_eq!(status.progress, 0.0);
        assert_eq!(status.spent.cents(), 1_000_000);
    }

    #[test]
    fn test_empty_collection_with_limit() {
        let status = BudgetStatus::compute(&[], Some(Money::from_cents(10000)), date(2024, 5, 15));
        assert!(!status.over_budget);
        assert_eq!(status.progress, 0.0);
        assert!(status.spent.is_zero());
    }

    #[test]
    fn test_over_budget_is_strict() {
        let limit = Some(Money::from_cents(10000));

        let at_limit = vec![expense(10000, date(2024, 5, 1))];
        let status = BudgetStatus::compute(&at_limit, limit, date(2024, 5, 15));
        assert!(!status.over_budget);
        assert_eq!(status.progress, 1.0);

        let above = vec![expense(10001, date(2024, 5, 1))];
        let status = BudgetStatus::compute(&above, limit, date(2024, 5, 15));
        assert!(status.over_budget);
    }

    #[test]
    fn test_limit_100_spend_150() {
        // limit $100, one May expense of $150
        let expenses = vec![expense(15000, date(2024, 5, 10))];
        let status =
            BudgetStatus::compute(&expenses, Some(Money::from_cents(10000)), date(2024, 5, 20));

        assert_eq!(status.spent.cents(), 15000);
        assert!(status.over_budget);
        assert_eq!(status.progress, 1.0);
    }

    #[test]
    fn test_progress_partial() {
        let expenses = vec![expense(2500, date(2024, 5, 10))];
        let status =
            BudgetStatus::compute(&expenses, Some(Money::from_cents(10000)), date(2024, 5, 20));
        assert!((status.progress - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_zero_limit_gives_zero_progress() {
        // A zero limit is set but not positive: progress pins to 0
        let expenses = vec![expense(2500, date(2024, 5, 10))];
        let status = BudgetStatus::compute(&expenses, Some(Money::zero()), date(2024, 5, 20));
        assert_eq!(status.progress, 0.0);
        // Strictly above zero, so still over budget
        assert!(status.over_budget);
    }

    #[test]
    fn test_only_reference_month_counts() {
        let expenses = vec![
            expense(9000, date(2024, 4, 30)),
            expense(2000, date(2024, 5, 1)),
        ];
        let status =
            BudgetStatus::compute(&expenses, Some(Money::from_cents(5000)), date(2024, 5, 20));
        assert_eq!(status.spent.cents(), 2000);
        assert!(!status.over_budget);
    }
}
