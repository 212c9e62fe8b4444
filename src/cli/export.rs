//! CLI commands for data export
//!
//! Writes the filtered expense view as CSV or XLSX.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{to_csv, to_xlsx, CSV_FILE_NAME, XLSX_FILE_NAME};
use crate::services::Ledger;

use super::DateFilter;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Excel workbook
    Xlsx,
}

impl ExportFormat {
    /// File name used when no output path is given
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_FILE_NAME,
            ExportFormat::Xlsx => XLSX_FILE_NAME,
        }
    }
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (defaults to expenses.csv or expenses.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: DateFilter,
}

/// Handle the export command
pub fn handle_export_command(ledger: &Ledger, args: ExportArgs) -> LedgerResult<()> {
    let (_, view) = args.filter.apply(ledger.expenses())?;

    let bytes = match args.format {
        ExportFormat::Csv => to_csv(&view)?,
        ExportFormat::Xlsx => to_xlsx(&view)?,
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(args.format.default_file_name()));

    fs::write(&output, bytes).map_err(|e| {
        LedgerError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;

    println!("Exported {} expense(s) to: {}", view.len(), output.display());
    Ok(())
}
