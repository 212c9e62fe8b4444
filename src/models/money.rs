//! Money type for representing expense amounts
//!
//! Amounts are exact decimals. On disk an amount is a plain JSON number in
//! whole units (`50.0`, `33.333`), matching the ledger file format; the
//! decimal read back is the shortest one that reproduces that number, so a
//! load followed by a save writes the same value.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Largest amount a single expense may carry, in whole units
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

/// Represents an exact monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_decimal_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// The largest amount a single expense may carry
    pub fn max_expense() -> Self {
        Self(Decimal::from(MAX_AMOUNT_UNITS))
    }

    /// Convert a floating point value in whole units
    ///
    /// The result is the shortest decimal that reproduces `units`, so
    /// `33.333` stays `33.333`. Returns `None` for NaN, infinities, and
    /// values a decimal cannot hold exactly.
    pub fn from_f64(units: f64) -> Option<Self> {
        if !units.is_finite() {
            return None;
        }
        Decimal::from_str_exact(&units.to_string()).ok().map(Self)
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Get the amount as a floating point value in whole units
    pub fn as_f64(&self) -> f64 {
        self.0.normalize().to_string().parse().unwrap_or(0.0)
    }

    /// True when the amount survives a trip through the JSON number format
    pub fn is_f64_exact(&self) -> bool {
        Money::from_f64(self.as_f64()) == Some(*self)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5", "1,250.00",
    /// "0.004". Every digit is kept; input a decimal cannot hold exactly is
    /// rejected rather than rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (sign, unsigned) = match original.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", original),
        };

        let digits: String = unsigned.chars().filter(|c| *c != ',').collect();
        let (units, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        if units.is_empty() || !units.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let fraction = if fraction.is_empty() { "0" } else { fraction };
        let normalized = format!("{}{}.{}", sign, units, fraction);

        Decimal::from_str_exact(&normalized)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Plain decimal rendering with at least two places and no grouping
    /// ("1234.50", "33.333")
    pub fn to_decimal_string(&self) -> String {
        let value = self.0.normalize();
        if value.scale() <= 2 {
            format!("{:.2}", value)
        } else {
            value.to_string()
        }
    }

    /// Format with a currency symbol and thousands grouping ("PKR 1,234.50")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", symbol, self)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.to_decimal_string();
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (digits, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        f.pad(&format!("{}{}.{}", sign, grouped, fraction))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Money::from_f64(units)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", units)))
    }
}

// Saturating; single expenses are capped at `MAX_AMOUNT_UNITS`
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
