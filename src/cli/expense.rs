//! Expense CLI commands
//!
//! Implements adding, listing, importing and clearing expenses, plus the
//! audit history view.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::{LedgerPaths, Settings};
use crate::display::{format_expense_table, format_history};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseInput, DATE_FORMAT};
use crate::reports::{sorted_by_date_descending, total_amount};
use crate::services::Ledger;

use super::DateFilter;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount (e.g., "50" or "1,250.75")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Transport, Bills, Shopping, Entertainment, Other)
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: DateFilter,
        /// Show at most this many expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Import expenses from a CSV file in the export layout
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Delete every expense
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show recent ledger changes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    paths: &LedgerPaths,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
        } => {
            let date = date.unwrap_or_else(|| {
                chrono::Local::now()
                    .date_naive()
                    .format(DATE_FORMAT)
                    .to_string()
            });
            let expense = ledger.add_expense(ExpenseInput::new(title, amount, category, date))?;

            println!("Added expense: {}", expense.title);
            println!("  Date:     {}", expense.date.format(&settings.date_format));
            println!(
                "  Amount:   {}",
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Category: {}", expense.category);
        }

        ExpenseCommands::List { filter, limit } => {
            let (_, view) = filter.apply(ledger.expenses())?;
            let total = total_amount(&view);
            let mut sorted = sorted_by_date_descending(&view);
            if let Some(limit) = limit {
                sorted.truncate(limit);
            }

            print!(
                "{}",
                format_expense_table(
                    &sorted,
                    total,
                    view.len(),
                    &settings.date_format,
                    &settings.currency_symbol
                )
            );
        }

        ExpenseCommands::Import { file } => {
            let handle = File::open(&file).map_err(|e| {
                LedgerError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let summary = ledger.import_csv(BufReader::new(handle))?;

            println!(
                "Imported {} expense(s) from {}",
                summary.imported.len(),
                file.display()
            );
            if !summary.rejected.is_empty() {
                println!("Skipped {} invalid row(s):", summary.rejected.len());
                for row in &summary.rejected {
                    println!("  line {}: {}", row.line, row.reason);
                }
            }
        }

        ExpenseCommands::Clear { yes } => {
            if !yes {
                eprintln!(
                    "This will delete all {} expense(s). Re-run with --yes to confirm.",
                    ledger.len()
                );
                return Ok(());
            }
            let removed = ledger.clear_all()?;
            println!("Cleared {} expense(s).", removed);
        }

        ExpenseCommands::History { limit } => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(limit)?;
            print!("{}", format_history(&entries));
        }
    }

    Ok(())
}

