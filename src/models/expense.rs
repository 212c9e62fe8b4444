//! Expense model
//!
//! An expense is a dated, titled, positive amount filed under one category.
//! Records carry no identifier; two expenses with equal fields are
//! indistinguishable and both are kept.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Date format used on disk and in exports
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date of the expense
    pub date: NaiveDate,

    /// What the money was spent on (non-empty, trimmed)
    pub title: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category the expense is filed under
    pub category: Category,
}

impl Expense {
    /// Create a validated expense
    ///
    /// The title is trimmed before it is stored.
    pub fn new(
        date: NaiveDate,
        title: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            date,
            title: title.into().trim().to_string(),
            amount,
            category,
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::max_expense() {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if !self.amount.is_f64_exact() {
            return Err(ExpenseValidationError::AmountTooPrecise(self.amount));
        }

        Ok(())
    }

    /// Year-month grouping key ("2024-01")
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date.format(DATE_FORMAT),
            self.title,
            self.amount,
            self.category
        )
    }
}

/// Raw, unvalidated expense fields as collected from a user or a CSV row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseInput {
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Validate and normalize into an [`Expense`]
    ///
    /// Fields are checked in form order: title, amount, category, date.
    pub fn into_expense(self) -> Result<Expense, ExpenseValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        let amount = Money::parse(&self.amount)
            .map_err(|_| ExpenseValidationError::InvalidAmount(self.amount.trim().to_string()))?;

        let category: Category = self
            .category
            .parse()
            .map_err(|_| ExpenseValidationError::UnknownCategory(self.category.trim().to_string()))?;

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ExpenseValidationError::InvalidDate(self.date.trim().to_string()))?;

        Expense::new(date, title, amount, category)
    }
}

impl From<&Expense> for ExpenseInput {
    fn from(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_decimal_string(),
            category: expense.category.as_str().to_string(),
            date: expense.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Reasons an expense is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    InvalidAmount(String),
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    /// More significant digits than the ledger file can store
    AmountTooPrecise(Money),
    UnknownCategory(String),
    InvalidDate(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::InvalidAmount(raw) => write!(f, "Invalid amount: '{}'", raw),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount {} exceeds the maximum of {}",
                amount,
                Money::max_expense()
            ),
            Self::AmountTooPrecise(amount) => write!(
                f,
                "Amount {} has too many significant digits to store",
                amount.to_decimal_string()
            ),
            Self::UnknownCategory(raw) => write!(
                f,
                "Unknown category '{}'. Expected one of: {}",
                raw,
                Category::names()
            ),
            Self::InvalidDate(raw) => write!(f, "Invalid date '{}'. Use YYYY-MM-DD", raw),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
