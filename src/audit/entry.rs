//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Ledger mutations that get audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// One expense appended
    Append,
    /// Whole ledger emptied
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Append => write!(f, "APPEND"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Number of records added or removed
    pub records_affected: usize,

    /// Ledger size once the operation completed
    pub ledger_size: usize,

    /// JSON representation of the appended record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a single appended expense
    pub fn append(expense: &Expense, ledger_size: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Append,
            records_affected: 1,
            ledger_size,
            record: serde_json::to_value(expense).ok(),
        }
    }

    /// Entry for a full clear
    pub fn clear(removed: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Clear,
            records_affected: removed,
            ledger_size: 0,
            record: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        match self.operation {
            Operation::Append => {
                if let Some(record) = self.record.as_ref().and_then(describe_record) {
                    output.push_str(&format!(" {}", record));
                }
            }
            Operation::Clear => {
                output.push_str(&format!(" removed {} record(s)", self.records_affected));
            }
        }

        output.push_str(&format!(" (ledger size {})", self.ledger_size));
        output
    }
}

fn describe_record(record: &serde_json::Value) -> Option<String> {
    let expense: Expense = serde_json::from_value(record.clone()).ok()?;
    Some(expense.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn groceries() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Groceries",
            Money::from_cents(5000),
            Category::Food,
        )
        .unwrap()
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Append.to_string(), "APPEND");
        assert_eq!(Operation::Clear.to_string(), "CLEAR");
    }

    #[test]
    fn test_append_entry() {
        let entry = AuditEntry::append(&groceries(), 3);

        assert_eq!(entry.operation, Operation::Append);
        assert_eq!(entry.records_affected, 1);
        assert_eq!(entry.ledger_size, 3);
        assert_eq!(entry.record.as_ref().unwrap()["title"], "Groceries");
    }

    #[test]
    fn test_clear_entry() {
        let entry = AuditEntry::clear(7);

        assert_eq!(entry.operation, Operation::Clear);
        assert_eq!(entry.records_affected, 7);
        assert_eq!(entry.ledger_size, 0);
        assert!(entry.record.is_none());
    }

    #[test]
    fn test_serialization_skips_missing_record() {
        let json = serde_json::to_string(&AuditEntry::clear(2)).unwrap();
        assert!(json.contains("\"operation\":\"clear\""));
        assert!(!json.contains("record\":"));

        let parsed: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.records_affected, 2);
    }

    #[test]
    fn test_format_human_readable() {
        let text = AuditEntry::append(&groceries(), 1).format_human_readable();
        assert!(text.contains("APPEND"));
        assert!(text.contains("2024-01-05 Groceries 50.00 [Food]"));
        assert!(text.ends_with("(ledger size 1)"));

        let text = AuditEntry::clear(4).format_human_readable();
        assert!(text.contains("CLEAR removed 4 record(s)"));
    }
}
