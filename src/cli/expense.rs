//! Expense CLI commands
//!
//! Input validation (amount syntax, category labels, dates) happens here
//! at the boundary; the core accepts whatever parses.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::diag::DiagLogger;
use crate::display::{expense_list_header, format_expense_row};
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `outlay add`
#[derive(Args)]
pub struct AddArgs {
    /// Expense title
    pub title: String,

    /// Amount, e.g. "12.50" (negative values are treated as refunds)
    pub amount: Money,

    /// Category: Housing, Food, Clothing, Transportation, or Education
    #[arg(short, long)]
    pub category: Category,

    /// Expense date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for `outlay remove`
#[derive(Args)]
pub struct RemoveArgs {
    /// Expense ids; full UUIDs or unique "exp-" prefixes as shown by `list`
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for `outlay list`
#[derive(Args)]
pub struct ListArgs {
    /// Only show one category
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Maximum number of expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `outlay add`
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    diag: &DiagLogger,
    args: AddArgs,
) -> OutlayResult<()> {
    let service = ExpenseService::new(storage, diag);
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let expense = service.add_expense(args.title, args.amount, date, args.category)?;
    println!(
        "Added {} {} {} ({}, {})",
        expense.id,
        expense.title,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.category,
        expense.date
    );
    Ok(())
}

/// Handle `outlay remove`
pub fn handle_remove(storage: &Storage, diag: &DiagLogger, args: RemoveArgs) -> OutlayResult<()> {
    let service = ExpenseService::new(storage, diag);
    let known = service.list()?;

    let mut ids = Vec::with_capacity(args.ids.len());
    for raw in &args.ids {
        ids.push(resolve_id(&known, raw)?);
    }

    let removed = service.remove_expenses(&ids)?;
    println!("Removed {} expense(s)", removed);
    Ok(())
}

/// Handle `outlay list`
pub fn handle_list(
    storage: &Storage,
    settings: &Settings,
    diag: &DiagLogger,
    args: ListArgs,
) -> OutlayResult<()> {
    let service = ExpenseService::new(storage, diag);
    let expenses = match args.category {
        Some(category) => service.list_by_category(category)?,
        None => service.list()?,
    };

    if expenses.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    let shown = args.limit.unwrap_or(expenses.len());
    if shown > 0 {
        println!("{}", expense_list_header());
        for expense in expenses.iter().take(shown) {
            println!("{}", format_expense_row(expense, settings));
        }
    }
    if expenses.len() > shown {
        println!("... and {} more", expenses.len() - shown);
    }
    Ok(())
}

/// Resolve an id argument against the current collection
///
/// Accepts a full UUID (with or without the "exp-" prefix) or a unique
/// prefix of one, as printed by `list`.
fn resolve_id(known: &[Expense], raw: &str) -> OutlayResult<ExpenseId> {
    if let Ok(id) = raw.parse::<ExpenseId>() {
        return Ok(id);
    }

    let prefix = raw.strip_prefix("exp-").unwrap_or(raw);
    if prefix.is_empty() {
        return Err(OutlayError::Validation(format!("Invalid expense id: {}", raw)));
    }

    let matches: Vec<_> = known
        .iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [only] => Ok(only.id),
        [] => Err(OutlayError::expense_not_found(raw)),
        _ => Err(OutlayError::Validation(format!(
            "Ambiguous expense id prefix: {}",
            raw
        ))),
    }
}
