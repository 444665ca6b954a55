//! # Money Module
//!
//! Provides the `Money` type for handling peso amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                 │
//! │                                                             │
//! │  In floating point:                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!               │
//! │                                                             │
//! │  OUR SOLUTION: Integer Centavos                             │
//! │    ₱95.00 is stored as 9500 centavos (i64)                  │
//! │    All arithmetic is exact; only display converts to pesos  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kape_core::money::Money;
//!
//! // Create from whole pesos or centavos
//! let base = Money::from_pesos(95);
//! let surcharge = Money::from_centavos(2000); // ₱20.00
//!
//! assert_eq!((base + surcharge).to_decimal_string(), "115.00");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest peso unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction of discounts must be representable even
///   when it dips below zero mid-computation
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for the customer store document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use kape_core::money::Money;
    ///
    /// let price = Money::from_pesos(95);
    /// assert_eq!(price.centavos(), 9500);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavo_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage expressed in basis points and returns the
    /// resulting portion (not the remainder).
    ///
    /// ## Arguments
    /// * `bps` - Basis points (2000 = 20%)
    ///
    /// ## Example
    /// ```rust
    /// use kape_core::money::Money;
    ///
    /// let subtotal = Money::from_pesos(780);
    /// let discount = subtotal.percent_of(2000); // 20%
    /// assert_eq!(discount, Money::from_pesos(156));
    /// ```
    pub fn percent_of(&self, bps: u32) -> Money {
        // i128 intermediate prevents overflow; +5000 rounds half up
        let portion = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money(portion as i64)
    }

    /// Formats the amount with exactly two decimal places and no currency
    /// sign, as used by the transaction log wire format.
    ///
    /// ## Example
    /// ```rust
    /// use kape_core::money::Money;
    ///
    /// assert_eq!(Money::from_centavos(62400).to_decimal_string(), "624.00");
    /// assert_eq!(Money::zero().to_decimal_string(), "0.00");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.pesos().abs(), self.centavo_part())
    }

    /// Parses a non-negative two-decimal amount (`"624.00"`, `"95"`,
    /// `"20.5"`) back into centavos. Inverse of [`Money::to_decimal_string`]
    /// for non-negative amounts.
    pub fn parse_decimal(s: &str) -> Result<Money, ValidationError> {
        let s = s.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let (pesos_part, centavo_part) = match s.split_once('.') {
            Some((p, c)) => (p, c),
            None => (s, ""),
        };

        if pesos_part.is_empty() || pesos_part.starts_with('-') {
            return Err(invalid("must be a non-negative decimal number"));
        }

        let pesos: i64 = pesos_part
            .parse()
            .map_err(|_| invalid("must be a non-negative decimal number"))?;

        let centavos: i64 = match centavo_part.len() {
            0 => 0,
            1 | 2 => {
                let digits: i64 = centavo_part
                    .parse()
                    .map_err(|_| invalid("fractional part must be digits"))?;
                if centavo_part.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
            _ => return Err(invalid("at most two decimal places allowed")),
        };

        Ok(Money(pesos * 100 + centavos))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with a peso sign, for receipts and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₱{}.{:02}", sign, self.pesos().abs(), self.centavo_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Sums an iterator of Money values.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pesos_and_centavos() {
        let money = Money::from_pesos(95);
        assert_eq!(money.centavos(), 9500);
        assert_eq!(money.pesos(), 95);
        assert_eq!(money.centavo_part(), 0);

        let money = Money::from_centavos(11550);
        assert_eq!(money.pesos(), 115);
        assert_eq!(money.centavo_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_centavos(62400)), "₱624.00");
        assert_eq!(format!("{}", Money::from_centavos(550)), "₱5.50");
        assert_eq!(format!("{}", Money::from_centavos(-550)), "-₱5.50");
        assert_eq!(format!("{}", Money::zero()), "₱0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pesos(170);
        let b = Money::from_pesos(25);

        assert_eq!((a + b).centavos(), 19500);
        assert_eq!((a - b).centavos(), 14500);
        assert_eq!((a * 4i64).centavos(), 68000);
    }

    #[test]
    fn test_percent_of() {
        // Senior discount: 20% of ₱780.00 = ₱156.00
        let subtotal = Money::from_pesos(780);
        assert_eq!(subtotal.percent_of(2000), Money::from_pesos(156));

        // Zero rate yields zero
        assert_eq!(subtotal.percent_of(0), Money::zero());
    }

    #[test]
    fn test_decimal_string_round_trip() {
        for centavos in [0, 5, 50, 9500, 62400, 11501] {
            let money = Money::from_centavos(centavos);
            let parsed = Money::parse_decimal(&money.to_decimal_string()).unwrap();
            assert_eq!(parsed, money);
        }
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(Money::parse_decimal("95").unwrap(), Money::from_pesos(95));
        assert_eq!(
            Money::parse_decimal("20.5").unwrap(),
            Money::from_centavos(2050)
        );
        assert_eq!(
            Money::parse_decimal(" 624.00 ").unwrap(),
            Money::from_centavos(62400)
        );

        assert!(Money::parse_decimal("-1.00").is_err());
        assert!(Money::parse_decimal("1.234").is_err());
        assert!(Money::parse_decimal("abc").is_err());
        assert!(Money::parse_decimal("").is_err());
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_pesos(1), Money::from_pesos(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_pesos(3));
    }
}
