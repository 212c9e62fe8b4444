//! Spreadsheet export
//!
//! Produces a single-sheet workbook named "Expenses" with the same columns
//! as the CSV export.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, DATE_FORMAT};

use super::csv::CSV_HEADERS;

/// Worksheet name used in exported workbooks
pub const SHEET_NAME: &str = "Expenses";

/// Serialize expenses to XLSX bytes
pub fn to_xlsx(expenses: &[Expense]) -> LedgerResult<Vec<u8>> {
    build_workbook(expenses).map_err(|e| LedgerError::Export(format!("Failed to build workbook: {}", e)))
}

fn build_workbook(expenses: &[Expense]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let amount_format = Format::new().set_num_format("0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in CSV_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, expense) in expenses.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, expense.date.format(DATE_FORMAT).to_string())?;
        worksheet.write_string(row, 1, expense.title.as_str())?;
        worksheet.write_number_with_format(row, 2, expense.amount.as_f64(), &amount_format)?;
        worksheet.write_string(row, 3, expense.category.as_str())?;
    }

    worksheet.set_column_width(0, 12)?;
    worksheet.set_column_width(1, 30)?;
    worksheet.set_column_width(2, 12)?;
    worksheet.set_column_width(3, 15)?;

    workbook.save_to_buffer()
}
