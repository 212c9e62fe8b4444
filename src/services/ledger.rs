//! Ledger service
//!
//! Owns the in-memory expense list and keeps it in step with the store.
//! Records are only ever appended one at a time (or in an import batch) or
//! cleared wholesale; there is no edit or single-record delete.

use std::io::Read;

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::export::read_rows;
use crate::models::{Expense, ExpenseInput, ExpenseValidationError};
use crate::storage::ExpenseStore;

/// The expense ledger
#[derive(Debug)]
pub struct Ledger {
    store: ExpenseStore,
    audit: Option<AuditLogger>,
    expenses: Vec<Expense>,
}

/// A CSV row that failed validation during import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// Line in the source file
    pub line: u64,
    pub reason: ExpenseValidationError,
}

/// Outcome of a CSV import
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub imported: Vec<Expense>,
    pub rejected: Vec<RejectedRow>,
}

impl Ledger {
    /// Load the ledger from a store
    pub fn open(store: ExpenseStore) -> LedgerResult<Self> {
        let expenses = store.load()?;
        Ok(Self {
            store,
            audit: None,
            expenses,
        })
    }

    /// Open the ledger at the configured location, with auditing enabled
    pub fn open_default(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        let store = ExpenseStore::with_policy(paths.expenses_file(), settings.load_policy);
        Ok(Self::open(store)?.with_audit(AuditLogger::new(paths.audit_log())))
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Validate raw input and append the resulting expense
    ///
    /// Invalid input leaves the ledger untouched. The full list is saved
    /// before this returns.
    pub fn add_expense(&mut self, input: ExpenseInput) -> LedgerResult<Expense> {
        let expense = input.into_expense()?;
        self.append(vec![expense.clone()])?;
        info!(date = %expense.date, category = %expense.category, "expense added");
        Ok(expense)
    }

    /// Remove every expense, returning how many were removed
    pub fn clear_all(&mut self) -> LedgerResult<usize> {
        self.store.clear()?;
        let removed = self.expenses.len();
        self.expenses.clear();

        info!(removed, "ledger cleared");
        self.audit(&AuditEntry::clear(removed));
        Ok(removed)
    }

    /// Append every valid row of a CSV in the export layout
    ///
    /// Rows that fail validation are reported and skipped. Structural
    /// problems (unreadable CSV, missing columns) abort the import without
    /// changing the ledger.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> LedgerResult<ImportSummary> {
        let rows = read_rows(reader)?;

        let mut summary = ImportSummary::default();
        for row in rows {
            match row.input.into_expense() {
                Ok(expense) => summary.imported.push(expense),
                Err(reason) => summary.rejected.push(RejectedRow {
                    line: row.line,
                    reason,
                }),
            }
        }

        if !summary.imported.is_empty() {
            self.append(summary.imported.clone())?;
        }

        info!(
            imported = summary.imported.len(),
            rejected = summary.rejected.len(),
            "csv import finished"
        );
        Ok(summary)
    }

    fn append(&mut self, batch: Vec<Expense>) -> LedgerResult<()> {
        let previous_len = self.expenses.len();
        self.expenses.extend(batch);

        if let Err(e) = self.store.save(&self.expenses) {
            self.expenses.truncate(previous_len);
            return Err(e);
        }

        for (offset, expense) in self.expenses[previous_len..].iter().enumerate() {
            self.audit(&AuditEntry::append(expense, previous_len + offset + 1));
        }

        Ok(())
    }

    fn audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}
