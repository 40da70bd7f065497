//! Monthly spending trend
//!
//! Produces the trailing-months series: one entry per calendar month,
//! oldest first, ending at the reference month. Months without records
//! contribute a zero total, so the series length is always exactly `n`.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, Money};

use super::summary::monthly_total;

/// Total for a single calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    /// Abbreviated month name, e.g. "May"
    pub label: String,
    pub total: Money,
}

/// Trailing-months spending series
#[derive(Debug, Clone)]
pub struct MonthlyTrend {
    pub months: Vec<MonthTotal>,
}

impl MonthlyTrend {
    /// Build the series for the `n` months ending at `reference`'s month
    pub fn generate(expenses: &[Expense], n: usize, reference: NaiveDate) -> Self {
        let months = (0..n)
            .rev()
            .map(|back| {
                let (year, month) = months_back(reference, back as i32);
                // Day 1 always exists for a valid year/month pair
                let anchor = NaiveDate::from_ymd_opt(year, month, 1)
                    .unwrap_or(reference);
                MonthTotal {
                    year,
                    month,
                    label: anchor.format("%b").to_string(),
                    total: monthly_total(expenses, anchor),
                }
            })
            .collect();

        Self { months }
    }

    /// Largest monthly total in the series, used for bar scaling
    pub fn max_total(&self) -> Money {
        self.months
            .iter()
            .map(|m| m.total)
            .max()
            .unwrap_or_else(Money::zero)
    }
}

/// The (year, month) pair `back` months before `reference`'s month
fn months_back(reference: NaiveDate, back: i32) -> (i32, u32) {
    let absolute = reference.year() * 12 + reference.month0() as i32 - back;
    (absolute.div_euclid(12), absolute.rem_euclid(12) as u32 + 1)
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
    fn test_months_back() {
        assert_eq!(months_back(date(2024, 5, 15), 0), (2024, 5));
        assert_eq!(months_back(date(2024, 5, 15), 3), (2024, 2));
        assert_eq!(months_back(date(2024, 5, 15), 5), (2023, 12));
        assert_eq!(months_back(date(2024, 1, 31), 1), (2023, 12));
    }

    #[test]
    fn test_always_exactly_n_entries() {
        let trend = MonthlyTrend::generate(&[], 6, date(2024, 5, 15));
        assert_eq!(trend.months.len(), 6);
        assert!(trend.months.iter().all(|m| m.total.is_zero()));

        let one = vec![expense(100, date(2024, 5, 1))];
        assert_eq!(MonthlyTrend::generate(&one, 6, date(2024, 5, 15)).months.len(), 6);
    }

    #[test]
    fn test_ordered_oldest_first_ending_at_reference() {
        let trend = MonthlyTrend::generate(&[], 6, date(2024, 5, 15));

        let pairs: Vec<_> = trend.months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(
            pairs,
            vec![(2023, 12), (2024, 1), (2024, 2), (2024, 3), (2024, 4), (2024, 5)]
        );
    }

    #[test]
    fn test_amounts_land_in_their_months() {
        let expenses = vec![
            expense(100, date(2024, 5, 1)),
            expense(200, date(2024, 5, 28)),
            expense(400, date(2024, 3, 10)),
            // Outside the window
            expense(800, date(2023, 11, 30)),
        ];

        let trend = MonthlyTrend::generate(&expenses, 6, date(2024, 5, 15));

        let may = trend.months.last().unwrap();
        assert_eq!((may.year, may.month), (2024, 5));
        assert_eq!(may.total.cents(), 300);

        let march = &trend.months[3];
        assert_eq!((march.year, march.month), (2024, 3));
        assert_eq!(march.total.cents(), 400);

        let december = &trend.months[0];
        assert_eq!((december.year, december.month), (2023, 12));
        assert!(december.total.is_zero());
    }

    #[test]
    fn test_labels_are_abbreviated_month_names() {
        let trend = MonthlyTrend::generate(&[], 2, date(2024, 2, 10));
        let labels: Vec<_> = trend.months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Feb"]);
    }

    #[test]
    fn test_max_total() {
        let expenses = vec![
            expense(100, date(2024, 5, 1)),
            expense(900, date(2024, 4, 1)),
        ];
        let trend = MonthlyTrend::generate(&expenses, 6, date(2024, 5, 15));
        assert_eq!(trend.max_total().cents(), 900);
    }
}
