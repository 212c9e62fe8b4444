//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod export;
pub mod expense;
pub mod report;

use chrono::NaiveDate;
use clap::Args;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseValidationError, DATE_FORMAT};
use crate::reports::{filter_by_date_range, DateRange};

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_summary_command, SummaryArgs};

/// Optional inclusive date bounds shared by the read-only commands
#[derive(Args, Debug, Clone, Default)]
pub struct DateFilter {
    /// Start date (YYYY-MM-DD), defaults to the earliest expense
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD), defaults to the latest expense
    #[arg(long)]
    pub to: Option<String>,
}

impl DateFilter {
    /// Resolve the bounds against the ledger
    ///
    /// `None` means there is nothing to report on: the ledger is empty and
    /// at least one bound was left open.
    pub fn resolve(&self, expenses: &[Expense]) -> LedgerResult<Option<DateRange>> {
        let start = parse_date(self.from.as_deref())?;
        let end = parse_date(self.to.as_deref())?;
        Ok(DateRange::resolve(start, end, expenses))
    }

    /// The expenses within the resolved range, in ledger order
    pub fn apply(&self, expenses: &[Expense]) -> LedgerResult<(Option<DateRange>, Vec<Expense>)> {
        let range = self.resolve(expenses)?;
        let view = match range {
            Some(range) => filter_by_date_range(expenses, range.start, range.end),
            None => Vec::new(),
        };
        Ok((range, view))
    }
}

/// Parse an optional `YYYY-MM-DD` argument
pub fn parse_date(value: Option<&str>) -> LedgerResult<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                .map_err(|_| LedgerError::from(ExpenseValidationError::InvalidDate(s.trim().to_string())))
        })
        .transpose()
}
