use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::cli::{
    handle_add, handle_budget_command, handle_list, handle_remove, handle_report_command, AddArgs,
    BudgetCommands, ListArgs, RemoveArgs, ReportCommands,
};
use outlay::config::{paths::OutlayPaths, settings::Settings};
use outlay::diag::DiagLogger;
use outlay::storage::Storage;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Command-line personal expense tracker",
    long_about = "Outlay records expenses with a title, amount, date, and category, \
                  totals spending against an optional monthly budget, and renders \
                  simple analytics in the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// Remove expenses by id
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Monthly budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Analytics reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OutlayPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let diag = DiagLogger::new(paths.diag_log());

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add(&storage, &settings, &diag, args)?;
        }
        Some(Commands::Remove(args)) => {
            handle_remove(&storage, &diag, args)?;
        }
        Some(Commands::List(args)) => {
            handle_list(&storage, &settings, &diag, args)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &mut settings, &paths, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Outlay Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expense file:   {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            match settings.monthly_limit {
                Some(limit) => println!(
                    "  Monthly limit: {}",
                    limit.format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("  Monthly limit: not set"),
            }
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("Outlay - command-line personal expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
        }
    }

    Ok(())
}
