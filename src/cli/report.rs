//! Report CLI commands
//!
//! Renders the analytics views: category breakdown and trailing-months
//! trend, both as simple terminal bar charts.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_bar, format_percentage, separator};
use crate::error::OutlayResult;
use crate::reports::{MonthlyTrend, SpendingSummary};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Per-category totals and percentage breakdown
    Summary,

    /// Spending per month for the trailing months
    Trend {
        /// Number of trailing months to include
        #[arg(short, long, default_value = "6")]
        months: usize,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> OutlayResult<()> {
    let expenses = storage.expenses.get_all()?;
    let symbol = &settings.currency_symbol;

    match cmd {
        ReportCommands::Summary => {
            let summary = SpendingSummary::generate(&expenses);

            println!("Spending by category");
            println!("{}", separator(60));
            for row in &summary.rows {
                println!(
                    "{} {:<16} {:>12}  [{}] {:>6}",
                    row.category.icon(),
                    row.category.label(),
                    row.total.format_with_symbol(symbol),
                    format_bar(row.percentage, 100.0, 20),
                    format_percentage(row.percentage),
                );
            }
            println!("{}", separator(60));
            println!("Total: {}", summary.total.format_with_symbol(symbol));
        }
        ReportCommands::Trend { months } => {
            let today = Local::now().date_naive();
            let trend = MonthlyTrend::generate(&expenses, months, today);
            let max = trend.max_total().cents() as f64;

            println!("Spending, last {} months", months);
            println!("{}", separator(60));
            for month in &trend.months {
                println!(
                    "{:>4} {:<4} {:>12}  [{}]",
                    month.year,
                    month.label,
                    month.total.format_with_symbol(symbol),
                    format_bar(month.total.cents() as f64, max, 20),
                );
            }
        }
    }

    Ok(())
}
