//! Terminal formatting helpers

pub mod expense;
pub mod report;

pub use expense::{expense_list_header, format_expense_row};
pub use report::{format_bar, format_percentage, separator, truncate};
