//! Service layer
//!
//! The ledger sits between the CLI and the store, validating input and
//! keeping memory and disk in step.

pub mod ledger;

pub use ledger::{ImportSummary, Ledger, RejectedRow};
