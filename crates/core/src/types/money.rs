//! Money type with exact decimal arithmetic and grouped display formatting.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount.
///
/// Backed by [`Decimal`], so line subtotals and cart totals are exact.
/// Amounts render as the currency symbol followed by the integer value
/// grouped in thousands with a period, which is how prices appear on the
/// tickets this system prints:
///
/// ```
/// use comandera_core::Money;
///
/// assert_eq!(Money::from_pesos(4500).display(), "$4.500");
/// assert_eq!(Money::from_pesos(950).display(), "$950");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The currency symbol used in display formatting.
    pub const SYMBOL: &'static str = "$";

    /// Create a money amount from a decimal value.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a money amount from a whole number of pesos.
    #[must_use]
    pub fn from_pesos(pesos: i64) -> Self {
        Self(Decimal::from(pesos))
    }

    /// The zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a quantity. Exact: no rounding occurs.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format for display: `$` plus the amount rounded to a whole number and
    /// grouped in thousands with `.` (e.g. `$4.500`).
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self.0.round();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}{}", Self::SYMBOL, group_thousands(&rounded.abs().to_string()))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Insert a `.` between every group of three digits, right to left.
///
/// The input must be the digits of a non-negative integer.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    grouped
}
