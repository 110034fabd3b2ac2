//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  2.23 has no exact binary float representation.                        │
//! │  Splitting "2.23" on the decimal point works until a price is "2.3"    │
//! │  (30 cents, not 3) or "1e-7".                                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices are rounded to cents ONCE, when they enter the machine.       │
//! │    Tender, change and the coffer total are all integer cents.           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use vend_core::money::Money;
//!
//! let price = Money::from_cents(223); // $2.23
//! let listed = Money::from_dollars(Decimal::new(122345, 4)).unwrap(); // 12.2345
//! assert_eq!(listed.cents(), 1223);
//! assert_eq!(price.to_string(), "$2.23");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative price must be representable so it can be
///   rejected by validation rather than wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let price = Money::from_cents(223); // Represents $2.23
    /// assert_eq!(price.cents(), 223);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a dollar amount to cents, rounding half away from zero.
    ///
    /// This is the only way a fractional value enters the machine. Returns
    /// `None` when the amount does not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use vend_core::money::Money;
    ///
    /// // 48.567 → 48.57
    /// let price = Money::from_dollars(Decimal::new(48567, 3)).unwrap();
    /// assert_eq!(price.cents(), 4857);
    /// ```
    pub fn from_dollars(dollars: Decimal) -> Option<Self> {
        let rounded = dollars.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as a two-digit dollar decimal, for rendering at the
    /// boundary.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use vend_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1048).to_dollars(), Decimal::new(1048, 2));
    /// ```
    #[inline]
    pub fn to_dollars(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

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

/// Multiplication by a coin count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
