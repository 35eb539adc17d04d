//! Safe monetary arithmetic using fixed-point decimal
//!
//! Booking totals and refund amounts use a type-safe Money type built on
//! rust_decimal. **NEVER use f64 for monetary values!**
//!
//! # Properties
//!
//! - Uses `Decimal` internally (28-29 significant digits)
//! - All arithmetic is exact (no rounding errors)
//! - Checked operations (never overflow/panic)
//! - Serializes as string (preserves precision)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monetary amount in minor units (e.g. cents) with fixed-point precision.
///
/// # Examples
///
/// ```rust
/// use showkit_lib::Money;
///
/// let a = Money::from_minor(2_500);
/// let b = Money::from_minor(500);
/// let total = a.checked_add(&b).unwrap();
/// assert_eq!(total.as_minor(), 3_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    // Decimal automatically serializes as string with serde feature
    value: Decimal,
}

impl Money {
    /// Create from minor units (smallest currency unit).
    pub fn from_minor(minor: i64) -> Self {
        Self {
            value: Decimal::from(minor),
        }
    }

    /// Create from decimal string (e.g., "123.45").
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed as a valid decimal.
    pub fn from_str_checked(s: &str) -> Result<Self, String> {
        Decimal::from_str(s)
            .map(|value| Self { value })
            .map_err(|e| format!("Invalid amount: {}", e))
    }

    /// Get value in minor units.
    ///
    /// If the value exceeds i64::MAX, returns i64::MAX.
    pub fn as_minor(&self) -> i64 {
        self.value.try_into().unwrap_or(i64::MAX)
    }

    /// Get the internal Decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Checked addition (returns None on overflow).
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.value
            .checked_add(other.value)
            .map(|value| Self { value })
    }

    /// Checked subtraction (returns None on overflow).
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.value
            .checked_sub(other.value)
            .map(|value| Self { value })
    }

    /// Calculate a percentage of this amount, rounded to whole minor units.
    ///
    /// Used to render backend-quoted refund percentages next to the
    /// resulting amount; the authoritative figure always comes from the
    /// backend.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use showkit_lib::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let total = Money::from_minor(10_000);
    /// assert_eq!(total.percentage(dec!(75)).as_minor(), 7_500);
    /// ```
    pub fn percentage(&self, rate: Decimal) -> Self {
        let rate_fraction = rate
            .checked_div(Decimal::from(100))
            .unwrap_or(Decimal::ZERO);
        self.value
            .checked_mul(rate_fraction)
            .map(|value| Self {
                value: value.round_dp(0),
            })
            .unwrap_or_else(Self::zero)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Money {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_checked(s)
    }
}
