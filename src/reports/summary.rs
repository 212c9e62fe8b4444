//! Expense Summary Report
//!
//! Totals for a date range, broken down by category (with each category's
//! share of the total) and by month.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense, Money};

use super::query::{by_category, by_month, filter_by_date_range, total_amount, DateRange};

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Percentage of the report total
    pub percentage: f64,
}

/// Spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    /// "YYYY-MM"
    pub month: String,
    pub total: Money,
}

/// Summary of a filtered view
#[derive(Debug, Clone)]
pub struct ExpenseSummary {
    pub range: DateRange,
    pub expense_count: usize,
    pub total: Money,
    /// Ordered by category name
    pub categories: Vec<CategoryTotal>,
    /// Chronological
    pub months: Vec<MonthTotal>,
}

impl ExpenseSummary {
    /// Generate a summary of the expenses dated within `range`
    pub fn generate(expenses: &[Expense], range: DateRange) -> Self {
        let view = filter_by_date_range(expenses, range.start, range.end);
        Self::from_view(&view, range)
    }

    /// Summarize an already filtered view
    pub fn from_view(view: &[Expense], range: DateRange) -> Self {
        let total = total_amount(view);

        let categories = by_category(view)
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category,
                total: amount,
                count: view.iter().filter(|e| e.category == category).count(),
                percentage: share(amount, total),
            })
            .collect();

        let months = by_month(view)
            .into_iter()
            .map(|(month, amount)| MonthTotal { month, total: amount })
            .collect();

        Self {
            range,
            expense_count: view.len(),
            total,
            categories,
            months,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// The `n` largest categories by spending, largest first
    pub fn top_categories(&self, n: usize) -> Vec<CategoryTotal> {
        let mut sorted = self.categories.clone();
        sorted.sort_by(|a, b| b.total.cmp(&a.total));
        sorted.truncate(n);
        sorted
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Summary: {} to {}\n",
            self.range.start, self.range.end
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent: {}\n",
            self.total.format_with_symbol(currency)
        ));
        output.push_str(&format!("Expenses: {}\n", self.expense_count));

        if self.is_empty() {
            output.push_str("\nNo expenses in this range.\n");
            return output;
        }

        output.push_str("\nBy Category\n");
        output.push_str(&format!(
            "{:<20} {:>14} {:>7} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>14} {:>7} {:>7.1}%  {}\n",
                row.category,
                row.total,
                row.count,
                row.percentage,
                bar(row.percentage)
            ));
        }

        output.push_str("\nBy Month\n");
        output.push_str(&format!("{:<20} {:>14}\n", "Month", "Amount"));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &self.months {
            output.push_str(&format!("{:<20} {:>14}\n", row.month, row.total));
        }

        output
    }

    /// Export the category and month breakdowns to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Section", "Key", "Amount", "Count", "Percentage"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        for row in &self.categories {
            csv.write_record([
                "category".to_string(),
                row.category.as_str().to_string(),
                row.total.to_decimal_string(),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        for row in &self.months {
            csv.write_record([
                "month".to_string(),
                row.month.clone(),
                row.total.to_decimal_string(),
                String::new(),
                String::new(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        csv.write_record([
            "total".to_string(),
            String::new(),
            self.total.to_decimal_string(),
            self.expense_count.to_string(),
            "100.00".to_string(),
        ])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        csv.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
        Ok(())
    }
}

fn share(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.as_f64() / total.as_f64() * 100.0
    }
}

/// Text bar standing in for the distribution chart, one block per 5%
fn bar(percentage: f64) -> String {
    let blocks = (percentage / 5.0).round().clamp(0.0, 20.0) as usize;
    "█".repeat(blocks)
}
