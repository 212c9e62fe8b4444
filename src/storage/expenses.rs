//! Expense store for JSON storage
//!
//! Manages loading and saving the expense list to expenses.json. The file is
//! a bare JSON array of expense objects and is rewritten wholesale on every
//! save.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::LoadPolicy;
use crate::error::LedgerError;
use crate::models::Expense;

use super::file_io::{read_json_required, write_json_atomic};

/// Durable mirror of the ledger
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
    policy: LoadPolicy,
}

impl ExpenseStore {
    /// Create a store with the strict load policy
    pub fn new(path: PathBuf) -> Self {
        Self::with_policy(path, LoadPolicy::Strict)
    }

    pub fn with_policy(path: PathBuf, policy: LoadPolicy) -> Self {
        Self { path, policy }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Load every expense from disk
    ///
    /// A missing file is initialized to an empty array. A file that is not a
    /// JSON array is always an error; individual bad entries are handled
    /// according to the load policy.
    pub fn load(&self) -> Result<Vec<Expense>, LedgerError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "ledger file missing, initializing");
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let raw: Value = read_json_required(&self.path)?;
        let entries = match raw {
            Value::Array(entries) => entries,
            other => {
                return Err(LedgerError::Storage(format!(
                    "Failed to parse {}: expected a JSON array, found {}",
                    self.path.display(),
                    json_kind(&other)
                )))
            }
        };

        let mut expenses = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match parse_entry(entry) {
                Ok(expense) => expenses.push(expense),
                Err(reason) => match self.policy {
                    LoadPolicy::Strict => {
                        return Err(LedgerError::Storage(format!(
                            "Invalid entry {} in {}: {}",
                            index,
                            self.path.display(),
                            reason
                        )))
                    }
                    LoadPolicy::SkipInvalid => {
                        warn!(index, %reason, "skipping invalid ledger entry");
                    }
                },
            }
        }

        debug!(count = expenses.len(), path = %self.path.display(), "loaded expenses");
        Ok(expenses)
    }

    /// Overwrite the file with the full collection
    pub fn save(&self, expenses: &[Expense]) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, expenses)
    }

    /// Reset the file to an empty array
    pub fn clear(&self) -> Result<(), LedgerError> {
        self.save(&[])
    }
}

fn parse_entry(entry: Value) -> Result<Expense, String> {
    let expense: Expense = serde_json::from_value(entry).map_err(|e| e.to_string())?;
    expense.validate().map_err(|e| e.to_string())?;
    Ok(expense)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("expenses.json");
        let store = ExpenseStore::new(path);
        (temp_dir, store)
    }

    fn expense(y: i32, m: u32, d: u32, title: &str, cents: i64, category: Category) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            title,
            Money::from_cents(cents),
            category,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_file_initialized_empty() {
        let (_temp_dir, store) = create_test_store();

        let loaded = store.load().unwrap();
        assert!(loaded.is_empty());
        assert!(store.path().exists());
        assert_eq!(fs::read_to_string(store.path()).unwrap().trim(), "[]");
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, store) = create_test_store();
        let expenses = vec![
            expense(2024, 2, 10, "Bus", 1000, Category::Transport),
            expense(2024, 1, 5, "Groceries", 5000, Category::Food),
            expense(2024, 1, 5, "Groceries", 5000, Category::Food),
        ];

        store.save(&expenses).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, expenses);
    }

    #[test]
    fn test_reads_existing_file_format() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"[
  {"date": "2024-01-05", "title": "Groceries", "amount": 50.0, "category": "Food"},
  {"category": "Transport", "amount": 10, "title": "Bus", "date": "2024-02-10"}
]"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].amount, Money::from_cents(5000));
        assert_eq!(loaded[1].category, Category::Transport);
    }

    #[test]
    fn test_load_save_round_trip_is_equivalent() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        let original = r#"[{"date":"2024-01-05","title":"Groceries","amount":50.25,"category":"Food"}]"#;
        fs::write(store.path(), original).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();

        let before: Value = serde_json::from_str(original).unwrap();
        let after: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_round_trip_keeps_extra_decimal_places() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        let original = r#"[
  {"date":"2024-01-05","title":"Split bill","amount":33.333,"category":"Food"},
  {"date":"2024-01-06","title":"Stamp","amount":0.004,"category":"Other"},
  {"date":"2024-01-07","title":"Snack","amount":19.999,"category":"Food"}
]"#;
        fs::write(store.path(), original).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].amount.to_decimal_string(), "0.004");
        store.save(&loaded).unwrap();

        let before: Value = serde_json::from_str(original).unwrap();
        let after: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_not_an_array_is_storage_error() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"expenses": []}"#).unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_storage());
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn test_invalid_json_is_storage_error() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "[{").unwrap();

        assert!(store.load().unwrap_err().is_storage());
    }

    #[test]
    fn test_strict_policy_rejects_bad_entry() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"[
  {"date": "2024-01-05", "title": "Groceries", "amount": 50.0, "category": "Food"},
  {"date": "2024-01-06", "title": "Mystery", "amount": 5.0}
]"#,
        )
        .unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_storage());
        assert!(err.to_string().contains("Invalid entry 1"));
    }

    #[test]
    fn test_skip_invalid_policy_keeps_good_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(
            &path,
            r#"[
  {"date": "2024-01-05", "title": "Groceries", "amount": 50.0, "category": "Food"},
  {"date": "not a date", "title": "Broken", "amount": 5.0, "category": "Food"},
  {"date": "2024-01-07", "title": "  ", "amount": 5.0, "category": "Food"},
  {"date": "2024-01-08", "title": "Refund", "amount": -5.0, "category": "Other"},
  {"date": "2024-01-09", "title": "Taxi", "amount": 12.5, "category": "Travel"},
  {"date": "2024-01-10", "title": "Movie", "amount": 8.0, "category": "Entertainment"}
]"#,
        )
        .unwrap();

        let store = ExpenseStore::with_policy(path, LoadPolicy::SkipInvalid);
        let loaded = store.load().unwrap();
        let titles: Vec<_> = loaded.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Groceries", "Movie"]);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, store) = create_test_store();
        store
            .save(&[expense(2024, 1, 5, "Groceries", 5000, Category::Food)])
            .unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
