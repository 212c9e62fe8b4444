//! Read-only queries over a snapshot of expenses
//!
//! Every function here takes a slice and returns a fresh value; nothing
//! touches the ledger or the store.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money};

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Fill unspecified bounds from the earliest and latest expense
    ///
    /// Returns `None` when a bound is missing and there are no expenses to
    /// take it from.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        expenses: &[Expense],
    ) -> Option<Self> {
        let bounds = date_bounds(expenses);
        let start = start.or(bounds.map(|(first, _)| first))?;
        let end = end.or(bounds.map(|(_, last)| last))?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// True when start is after end; such a range matches nothing
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Expenses dated within `[start, end]`, in their original order
pub fn filter_by_date_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    if expenses.is_empty() {
        return Vec::new();
    }

    let range = DateRange::new(start, end);
    expenses
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect()
}

/// Sum of all amounts; zero for an empty slice
pub fn total_amount(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category sums, ordered by category name
///
/// Categories without expenses are absent rather than zero.
pub fn by_category(expenses: &[Expense]) -> BTreeMap<Category, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// Per-month sums keyed by "YYYY-MM", in chronological order
pub fn by_month(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.month_key()).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// Newest first; expenses on the same date keep their relative order
pub fn sorted_by_date_descending(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Earliest and latest expense dates
pub fn date_bounds(expenses: &[Expense]) -> Option<(NaiveDate, NaiveDate)> {
    let first = expenses.iter().map(|e| e.date).min()?;
    let last = expenses.iter().map(|e| e.date).max()?;
    Some((first, last))
}
