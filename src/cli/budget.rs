//! Budget CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::{OutlayPaths, Settings};
use crate::display::{format_bar, format_percentage};
use crate::error::OutlayResult;
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly spending limit
    Set {
        /// Limit amount, e.g. "500" or "500.00"
        amount: Money,
    },

    /// Remove the monthly spending limit
    Clear,

    /// Show spending against the limit for the current month
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &mut Settings,
    paths: &OutlayPaths,
    cmd: BudgetCommands,
) -> OutlayResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { amount } => {
            service.set_limit(settings, paths, amount)?;
            println!(
                "Monthly limit set to {}",
                amount.format_with_symbol(&settings.currency_symbol)
            );
        }
        BudgetCommands::Clear => {
            service.clear_limit(settings, paths)?;
            println!("Monthly limit cleared");
        }
        BudgetCommands::Show => {
            let today = Local::now().date_naive();
            let status = service.status(settings, today)?;
            let symbol = &settings.currency_symbol;

            println!("Budget for {}", today.format("%B %Y"));
            match status.limit {
                Some(limit) => {
                    println!(
                        "  Spent {} of {}  [{}] {}",
                        status.spent.format_with_symbol(symbol),
                        limit.format_with_symbol(symbol),
                        format_bar(status.progress, 1.0, 20),
                        format_percentage(status.progress * 100.0),
                    );
                    if status.over_budget {
                        println!("  Over budget!");
                    }
                }
                None => {
                    println!(
                        "  Spent {} (no monthly limit set)",
                        status.spent.format_with_symbol(symbol)
                    );
                }
            }
        }
    }

    Ok(())
}
