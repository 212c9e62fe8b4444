//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the domain:
//! expenses, their categories, and monetary amounts.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, ExpenseInput, ExpenseValidationError, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
