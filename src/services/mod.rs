//! Business logic layer

pub mod budget;
pub mod expense;

pub use budget::{BudgetService, BudgetStatus};
pub use expense::ExpenseService;
