//! CLI commands for reports
//!
//! Provides the spending summary, printed or exported to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::ExpenseSummary;
use crate::services::Ledger;

use super::DateFilter;

/// Arguments for the summary report
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filter: DateFilter,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show top N categories only
    #[arg(long)]
    pub top: Option<usize>,
}

/// Handle the summary command
pub fn handle_summary_command(
    ledger: &Ledger,
    settings: &Settings,
    args: SummaryArgs,
) -> LedgerResult<()> {
    let (range, view) = args.filter.apply(ledger.expenses())?;
    let Some(range) = range else {
        println!("No expenses recorded.");
        return Ok(());
    };

    let mut summary = ExpenseSummary::from_view(&view, range);
    if let Some(n) = args.top {
        summary.categories = summary.top_categories(n);
    }

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        summary.export_csv(&mut writer)?;
        println!("Summary exported to: {}", path.display());
    } else {
        print!("{}", summary.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
