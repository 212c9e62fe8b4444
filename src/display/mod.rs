//! Display formatting for terminal output

pub mod audit;
pub mod expense;

pub use audit::format_history;
pub use expense::format_expense_table;
