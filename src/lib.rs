//! Expense Ledger - personal expense tracking from the terminal
//!
//! This library provides the core functionality for the `expenses` binary:
//! an append-only ledger of dated, categorized expenses persisted as a JSON
//! file, with date-range queries, summaries and CSV/XLSX export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money)
//! - `storage`: JSON file storage layer
//! - `services`: The ledger engine
//! - `reports`: Read-only queries and the summary report
//! - `export`: CSV and XLSX encoders
//! - `audit`: Audit logging system
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{LedgerPaths, Settings};
//! use expense_ledger::models::ExpenseInput;
//! use expense_ledger::services::Ledger;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut ledger = Ledger::open_default(&paths, &settings)?;
//! ledger.add_expense(ExpenseInput::new("Groceries", "50", "Food", "2024-01-05"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
