//! CSV export and import
//!
//! Writes expenses as `date,title,amount,category` rows and reads the same
//! layout back. Columns are matched by header name on import, so reordered
//! files from spreadsheet round trips still load.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseInput, DATE_FORMAT};

/// Column headers in export order
pub const CSV_HEADERS: [&str; 4] = ["date", "title", "amount", "category"];

/// Serialize expenses to UTF-8 CSV bytes
pub fn to_csv(expenses: &[Expense]) -> LedgerResult<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in expenses {
        let date = expense.date.format(DATE_FORMAT).to_string();
        let amount = expense.amount.to_decimal_string();
        writer
            .write_record([
                date.as_str(),
                expense.title.as_str(),
                amount.as_str(),
                expense.category.as_str(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| LedgerError::Export(format!("Failed to flush CSV: {}", e)))
}

/// A parsed data row and the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub line: u64,
    pub input: ExpenseInput,
}

/// Read rows in the export layout without validating their values
///
/// Fails only on structural problems: unreadable CSV or a missing column.
pub fn read_rows<R: Read>(reader: R) -> LedgerResult<Vec<CsvRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(CsvRow {
            line,
            input: columns.extract(&record),
        });
    }

    Ok(rows)
}

/// Parse CSV bytes back into raw expense inputs
pub fn from_csv(bytes: &[u8]) -> LedgerResult<Vec<ExpenseInput>> {
    Ok(read_rows(bytes)?.into_iter().map(|row| row.input).collect())
}

struct ColumnIndex {
    date: usize,
    title: usize,
    amount: usize,
    category: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> LedgerResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
                .ok_or_else(|| LedgerError::Import(format!("Missing '{}' column", name)))
        };

        Ok(Self {
            date: find("date")?,
            title: find("title")?,
            amount: find("amount")?,
            category: find("category")?,
        })
    }

    fn extract(&self, record: &StringRecord) -> ExpenseInput {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        ExpenseInput {
            title: field(self.title),
            amount: field(self.amount),
            category: field(self.category),
            date: field(self.date),
        }
    }
}
