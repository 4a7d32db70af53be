//! Currency amounts held as whole cents.

// Cent conversion is range-checked before casting
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Largest amount accepted from a decimal source (about 90 trillion).
const MAX_DECIMAL: f64 = 9.0e13;

/// Largest distance from a whole cent still treated as float noise.
const CENT_TOLERANCE: f64 = 1e-6;

/// A non-negative monthly amount in cents.
///
/// Catalog files specify prices as decimal numbers (`25.00`). Only whole
/// cents are accepted, so a sum of `Money` values is exactly the decimal sum
/// rounded to two places.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    cents: u64,
}

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates an amount from whole cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Converts a decimal amount of whole cents.
    ///
    /// Binary float noise (`511.67 * 100 = 51167.00000000001`) is absorbed;
    /// a real fraction of a cent is not.
    ///
    /// # Errors
    ///
    /// Returns an error for negative, non-finite, sub-cent or absurdly large
    /// values.
    pub fn from_decimal(amount: f64) -> Result<Self> {
        if !amount.is_finite() {
            anyhow::bail!("Amount must be a finite number, got {amount}");
        }
        if amount < 0.0 {
            anyhow::bail!("Amount cannot be negative, got {amount:.2}");
        }
        if amount > MAX_DECIMAL {
            anyhow::bail!("Amount {amount:.2} is out of range");
        }
        let scaled = amount * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > CENT_TOLERANCE.max(scaled * f64::EPSILON * 4.0) {
            anyhow::bail!("Amount {amount} has a fraction of a cent; use at most two decimals");
        }
        Ok(Self {
            cents: cents as u64,
        })
    }

    /// Returns the amount as a decimal number of dollars.
    #[must_use]
    pub fn as_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Formats without the currency sign, always with two decimals (`551.67`).
    #[must_use]
    pub fn amount_string(self) -> String {
        format!("{}.{:02}", self.cents / 100, self.cents % 100)
    }

    /// Subtracts, stopping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            cents: self.cents.saturating_sub(other.cents),
        }
    }
}

/// Formats as a currency string, e.g. `$551.67`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount_string())
    }
}

impl TryFrom<f64> for Money {
    type Error = anyhow::Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_decimal(value)
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> Self {
        value.as_decimal()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
