//! Reports module for the expense ledger
//!
//! Provides the read-only query functions (date filtering, totals,
//! category and month grouping, ordering) and the summary report built
//! from them.

pub mod query;
pub mod summary;

pub use query::{
    by_category, by_month, date_bounds, filter_by_date_range, sorted_by_date_descending,
    total_amount, DateRange,
};
pub use summary::{CategoryTotal, ExpenseSummary, MonthTotal};
