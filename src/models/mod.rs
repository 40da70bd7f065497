//! Core data models for Outlay
//!
//! Expense records, the closed category set, money, and identifiers.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::Category;
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
