//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add, handle_list, handle_remove, AddArgs, ListArgs, RemoveArgs};
pub use report::{handle_report_command, ReportCommands};
