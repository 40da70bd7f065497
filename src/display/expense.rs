//! Expense list formatting

use crate::config::Settings;
use crate::models::Expense;

use super::report::truncate;

/// Column header matching `format_expense_row`
pub fn expense_list_header() -> String {
    format!(
        "{:<12} {:<10} {:<18} {:<24} {:>12}",
        "ID", "DATE", "CATEGORY", "TITLE", "AMOUNT"
    )
}

/// One line of the expense list
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:<12} {:<10} {} {:<16} {:<24} {:>12}",
        expense.id.to_string(),
        expense.date.format(&settings.date_format).to_string(),
        expense.category.icon(),
        expense.category.label(),
        truncate(&expense.title, 24),
        expense.amount.format_with_symbol(&settings.currency_symbol),
    )
}
