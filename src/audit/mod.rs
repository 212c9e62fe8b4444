//! Audit logging for the expense ledger
//!
//! Records every ledger mutation in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single mutation with timestamp, operation, the number
//!   of records affected, and the appended record when there is one.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::append(&expense, ledger_size))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
