//! Export module for the expense ledger
//!
//! Serializes a view of expenses into downloadable payloads:
//! - CSV: plain `date,title,amount,category` rows (also re-importable)
//! - XLSX: single-sheet workbook named "Expenses"
//!
//! Both encoders are pure functions of the slice they are given.

pub mod csv;
pub mod xlsx;

pub use self::csv::{from_csv, read_rows, to_csv, CsvRow, CSV_HEADERS};
pub use self::xlsx::{to_xlsx, SHEET_NAME};

/// Default file name for CSV downloads
pub const CSV_FILE_NAME: &str = "expenses.csv";

/// Default file name for spreadsheet downloads
pub const XLSX_FILE_NAME: &str = "expenses.xlsx";
