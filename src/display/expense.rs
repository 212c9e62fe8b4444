//! Expense display formatting
//!
//! Renders expense lists as terminal tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, date_format: &str) -> Self {
        Self {
            date: expense.date.format(date_format).to_string(),
            title: truncate(&expense.title, 40),
            category: expense.category.to_string(),
            amount: expense.amount.to_string(),
        }
    }
}

/// Format expenses as a table followed by a total line
///
/// `shown` is the slice to render; `total` covers the full view, which may
/// be larger when the list was limited.
pub fn format_expense_table(
    shown: &[Expense],
    total: Money,
    matching: usize,
    date_format: &str,
    currency: &str,
) -> String {
    if shown.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = shown
        .iter()
        .map(|e| ExpenseRow::new(e, date_format))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');

    if shown.len() < matching {
        output.push_str(&format!("Showing {} of {} expenses\n", shown.len(), matching));
    }
    output.push_str(&format!("Total: {}\n", total.format_with_symbol(currency)));
    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn expense(d: u32, title: &str, cents: i64, category: Category) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            title,
            Money::from_cents(cents),
            category,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_list() {
        let text = format_expense_table(&[], Money::zero(), 0, "%Y-%m-%d", "PKR");
        assert_eq!(text, "No expenses found.\n");
    }

    #[test]
    fn test_table_contents() {
        let expenses = vec![
            expense(5, "Groceries", 5000, Category::Food),
            expense(6, "Bus", 1000, Category::Transport),
        ];
        let text = format_expense_table(&expenses, Money::from_cents(6000), 2, "%d/%m/%Y", "PKR");

        assert!(text.contains("Date"));
        assert!(text.contains("05/01/2024"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("Transport"));
        assert!(text.contains("50.00"));
        assert!(text.ends_with("Total: PKR 60.00\n"));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn test_limited_list_notes_count() {
        let expenses = vec![expense(5, "Groceries", 5000, Category::Food)];
        let text = format_expense_table(&expenses, Money::from_cents(6000), 2, "%Y-%m-%d", "PKR");
        assert!(text.contains("Showing 1 of 2 expenses"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title indeed", 10), "a very ...");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }
}
