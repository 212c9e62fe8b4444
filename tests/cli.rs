use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_LEDGER_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .current_dir(data_dir);
    cmd
}

fn add(data_dir: &Path, title: &str, amount: &str, category: &str, date: &str) {
    expenses(data_dir)
        .args(["add", title, amount, "-c", category, "-d", date])
        .assert()
        .success();
}

fn seed(data_dir: &Path) {
    add(data_dir, "Groceries", "50", "Food", "2024-01-05");
    add(data_dir, "Bus", "10", "Transport", "2024-02-10");
}

#[test]
fn add_then_list() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["add", "Groceries", "50", "-c", "food", "-d", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: Groceries"))
        .stdout(predicate::str::contains("PKR 50.00"));

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Total: PKR 50.00"));

    let stored = fs::read_to_string(temp.path().join("data").join("expenses.json")).unwrap();
    assert!(stored.contains("\"title\": \"Groceries\""));
    assert!(stored.contains("\"category\": \"Food\""));
}

#[test]
fn list_on_empty_ledger() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn invalid_add_is_rejected() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["add", "Lunch", "-5", "-c", "Food", "-d", "2024-01-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    expenses(temp.path())
        .args(["add", "Lunch", "5", "-c", "Travel", "-d", "2024-01-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'Travel'"));

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn list_filters_by_date() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .args(["list", "--from", "2024-01-01", "--to", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Bus").not());

    expenses(temp.path())
        .args(["list", "--from", "2024-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2024-13-01"));
}

#[test]
fn summary_shows_breakdowns() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Summary: 2024-01-05 to 2024-02-10"))
        .stdout(predicate::str::contains("Total Spent: PKR 60.00"))
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("2024-02"));
}

#[test]
fn summary_top_keeps_largest_categories() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .args(["summary", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Transport").not())
        .stdout(predicate::str::contains("Total Spent: PKR 60.00"));
}

#[test]
fn add_keeps_sub_cent_amounts() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["add", "Stamp", "0.004", "-c", "Other", "-d", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PKR 0.004"));

    let stored = fs::read_to_string(temp.path().join("data").join("expenses.json")).unwrap();
    assert!(stored.contains("\"amount\": 0.004"));
}

#[test]
fn summary_csv_output() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    let output = temp.path().join("summary.csv");

    expenses(temp.path())
        .args(["summary", "-o"])
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(output).unwrap();
    assert!(text.starts_with("Section,Key,Amount,Count,Percentage\n"));
    assert!(text.contains("month,2024-01,50.00,,\n"));
}

#[test]
fn export_csv_defaults_to_expenses_csv() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 expense(s)"));

    let text = fs::read_to_string(temp.path().join("expenses.csv")).unwrap();
    assert_eq!(
        text,
        "date,title,amount,category\n\
         2024-01-05,Groceries,50.00,Food\n\
         2024-02-10,Bus,10.00,Transport\n"
    );
}

#[test]
fn export_xlsx() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .args(["export", "--format", "xlsx", "--from", "2024-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expense(s)"));

    let bytes = fs::read(temp.path().join("expenses.xlsx")).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn import_reports_rejected_rows() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("in.csv");
    fs::write(
        &file,
        "date,title,amount,category\n\
         2024-03-01,Cinema,12.00,Entertainment\n\
         2024-03-02,Refund,-3,Other\n",
    )
    .unwrap();

    expenses(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 expense(s)"))
        .stdout(predicate::str::contains("line 3"));

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinema"))
        .stdout(predicate::str::contains("Refund").not());
}

#[test]
fn clear_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stderr(predicate::str::contains("--yes"));

    expenses(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 expense(s)."));

    let stored = fs::read_to_string(temp.path().join("data").join("expenses.json")).unwrap();
    assert_eq!(stored.trim(), "[]");
}

#[test]
fn history_lists_mutations() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    expenses(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success();

    expenses(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("APPEND"))
        .stdout(predicate::str::contains("CLEAR"));
}

#[test]
fn malformed_ledger_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data").join("expenses.json"), "{\"oops\": 1}").unwrap();

    expenses(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON array"));
}

#[test]
fn config_shows_paths() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json"))
        .stdout(predicate::str::contains("Currency:    PKR"));
}
