//! Money type for currency amounts
//!
//! Amounts are stored as whole cents in an i64, which sidesteps
//! floating-point drift in sums. Ratios (percentages, budget progress)
//! are computed in f64 from the cent values at the edges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use thiserror::Error;

/// A monetary amount in cents
///
/// Serializes as a bare integer, so `$10.50` is stored as `1050` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional cents portion (0-99)
    pub const fn subunits(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Ratio of this amount to `other`, as f64. Returns 0.0 when `other` is zero.
    pub fn ratio(&self, other: Money) -> f64 {
        if other.is_zero() {
            0.0
        } else {
            self.0 as f64 / other.0 as f64
        }
    }

    /// Format with an explicit currency symbol (e.g. "€")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.subunits())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.subunits())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid money amount: {0}")]
pub struct MoneyParseError(String);

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parse a decimal amount such as "10.50", "-4", "$12.5"
    ///
    /// At most two fractional digits are honored; an integer is read as
    /// whole currency units, not cents. The sign, if any, comes first
    /// ("-$10.50"); amounts too large for the cent representation are
    /// rejected rather than wrapped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoneyParseError(s.to_string());

        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // The sign is handled exactly once, above; anything left over
        // ("$-10.50", "--5") is malformed
        if rest.starts_with('-') || rest.starts_with('+') {
            return Err(invalid());
        }

        let magnitude = match rest.split_once('.') {
            Some((units_str, frac_str)) => {
                let units: i64 = units_str.parse().map_err(|_| invalid())?;
                if frac_str.is_empty()
                    || frac_str.len() > 2
                    || !frac_str.chars().all(|c| c.is_ascii_digit())
                {
                    return Err(invalid());
                }
                let frac: i64 = frac_str.parse().map_err(|_| invalid())?;
                let frac = if frac_str.len() == 1 { frac * 10 } else { frac };
                units
                    .checked_mul(100)
                    .and_then(|cents| cents.checked_add(frac))
                    .ok_or_else(invalid)?
            }
            None => rest
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
