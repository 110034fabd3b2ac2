//! # Coins
//!
//! The machine accepts and returns a fixed, closed set of six USD coins.
//!
//! ```text
//! ┌──────────────┬───────┐
//! │  Coin        │ Cents │
//! ├──────────────┼───────┤
//! │  Dollar      │  100  │
//! │  HalfDollar  │   50  │
//! │  Quarter     │   25  │
//! │  Dime        │   10  │
//! │  Nickel      │    5  │
//! │  Penny       │    1  │
//! └──────────────┴───────┘
//! ```
//!
//! Three shapes carry coins around:
//! - [`CoinPayload`] - raw numbers straight off the wire (may be fractional,
//!   negative or garbage)
//! - [`CoinCounts`] - trusted, non-negative counts for all six denominations
//! - [`CoinAmount`] - a signed integer adjustment for one denomination

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::sanitize_amount;

// =============================================================================
// Coin
// =============================================================================

/// One of the six accepted denominations.
///
/// Variants are declared from highest to lowest value; [`Coin::ALL`] keeps
/// that order, which the change calculation relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Coin {
    Dollar,
    HalfDollar,
    Quarter,
    Dime,
    Nickel,
    Penny,
}

impl Coin {
    /// Every denomination, highest value first.
    pub const ALL: [Coin; 6] = [
        Coin::Dollar,
        Coin::HalfDollar,
        Coin::Quarter,
        Coin::Dime,
        Coin::Nickel,
        Coin::Penny,
    ];

    /// Face value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        match self {
            Coin::Dollar => 100,
            Coin::HalfDollar => 50,
            Coin::Quarter => 25,
            Coin::Dime => 10,
            Coin::Nickel => 5,
            Coin::Penny => 1,
        }
    }

    /// Face value as [`Money`].
    #[inline]
    pub const fn value(&self) -> Money {
        Money::from_cents(self.cents())
    }

    /// Wire name, as used for payload keys.
    pub const fn name(&self) -> &'static str {
        match self {
            Coin::Dollar => "Dollar",
            Coin::HalfDollar => "HalfDollar",
            Coin::Quarter => "Quarter",
            Coin::Dime => "Dime",
            Coin::Nickel => "Nickel",
            Coin::Penny => "Penny",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Coin {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coin::ALL
            .into_iter()
            .find(|coin| coin.name() == s)
            .ok_or_else(|| ValidationError::UnknownCoin(s.to_string()))
    }
}

// =============================================================================
// Coin Counts
// =============================================================================

/// A trusted count for every denomination.
///
/// Used for change handed back to the buyer, coffer contents, and sanitized
/// tender. All six keys are always present on the wire:
/// ```json
/// { "Dollar": 0, "HalfDollar": 1, "Quarter": 1, "Dime": 0, "Nickel": 0, "Penny": 2 }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct CoinCounts {
    pub dollar: u32,
    pub half_dollar: u32,
    pub quarter: u32,
    pub dime: u32,
    pub nickel: u32,
    pub penny: u32,
}

impl CoinCounts {
    /// Returns the count for one denomination.
    pub const fn get(&self, coin: Coin) -> u32 {
        match coin {
            Coin::Dollar => self.dollar,
            Coin::HalfDollar => self.half_dollar,
            Coin::Quarter => self.quarter,
            Coin::Dime => self.dime,
            Coin::Nickel => self.nickel,
            Coin::Penny => self.penny,
        }
    }

    /// Sets the count for one denomination.
    pub fn set(&mut self, coin: Coin, count: u32) {
        let slot = match coin {
            Coin::Dollar => &mut self.dollar,
            Coin::HalfDollar => &mut self.half_dollar,
            Coin::Quarter => &mut self.quarter,
            Coin::Dime => &mut self.dime,
            Coin::Nickel => &mut self.nickel,
            Coin::Penny => &mut self.penny,
        };
        *slot = count;
    }

    /// Builder form of [`CoinCounts::set`].
    ///
    /// ```rust
    /// use vend_core::{Coin, CoinCounts};
    ///
    /// let tender = CoinCounts::default().with(Coin::Dollar, 2).with(Coin::Penny, 4);
    /// assert_eq!(tender.value().cents(), 204);
    /// ```
    pub fn with(mut self, coin: Coin, count: u32) -> Self {
        self.set(coin, count);
        self
    }

    /// Iterates `(coin, count)` pairs, highest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (Coin, u32)> + '_ {
        Coin::ALL.into_iter().map(move |coin| (coin, self.get(coin)))
    }

    /// Total number of coins across all denominations.
    pub fn total_coins(&self) -> u64 {
        self.iter().map(|(_, count)| u64::from(count)).sum()
    }

    /// Combined face value.
    pub fn value(&self) -> Money {
        self.iter().fold(Money::zero(), |total, (coin, count)| {
            total + coin.value() * i64::from(count)
        })
    }

    /// Checks if every count is zero.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, count)| count == 0)
    }
}

// =============================================================================
// Coin Payload
// =============================================================================

/// Coins as supplied by a caller, before anything is trusted.
///
/// Values are JSON numbers and missing denominations default to zero.
/// [`CoinPayload::sanitize`] turns this into [`CoinCounts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase", default)]
#[ts(export)]
pub struct CoinPayload {
    pub dollar: f64,
    pub half_dollar: f64,
    pub quarter: f64,
    pub dime: f64,
    pub nickel: f64,
    pub penny: f64,
}

impl CoinPayload {
    /// Returns the raw value for one denomination.
    pub const fn get(&self, coin: Coin) -> f64 {
        match coin {
            Coin::Dollar => self.dollar,
            Coin::HalfDollar => self.half_dollar,
            Coin::Quarter => self.quarter,
            Coin::Dime => self.dime,
            Coin::Nickel => self.nickel,
            Coin::Penny => self.penny,
        }
    }

    /// Sets the raw value for one denomination.
    pub fn with(mut self, coin: Coin, raw: f64) -> Self {
        let slot = match coin {
            Coin::Dollar => &mut self.dollar,
            Coin::HalfDollar => &mut self.half_dollar,
            Coin::Quarter => &mut self.quarter,
            Coin::Dime => &mut self.dime,
            Coin::Nickel => &mut self.nickel,
            Coin::Penny => &mut self.penny,
        };
        *slot = raw;
        self
    }

    /// Truncates every value to a whole coin count.
    ///
    /// Fractions degrade to their integer part; negative, NaN and infinite
    /// values count as zero coins.
    pub fn sanitize(&self) -> CoinCounts {
        Coin::ALL
            .into_iter()
            .fold(CoinCounts::default(), |counts, coin| {
                let raw = self.get(coin);
                let count = if raw.is_finite() {
                    u32::try_from(sanitize_amount(raw).max(0)).unwrap_or(u32::MAX)
                } else {
                    0
                };
                counts.with(coin, count)
            })
    }
}

impl From<CoinCounts> for CoinPayload {
    fn from(counts: CoinCounts) -> Self {
        counts
            .iter()
            .fold(CoinPayload::default(), |payload, (coin, count)| {
                payload.with(coin, f64::from(count))
            })
    }
}

// =============================================================================
// Coin Amount
// =============================================================================

/// A signed, whole-coin adjustment for a single denomination.
///
/// Fractional input is truncated toward zero, so `1.36` becomes `1` and
/// `-2.9` becomes `-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoinAmount(i64);

impl CoinAmount {
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for CoinAmount {
    fn from(amount: i64) -> Self {
        CoinAmount(amount)
    }
}

impl From<i32> for CoinAmount {
    fn from(amount: i32) -> Self {
        CoinAmount(i64::from(amount))
    }
}

impl From<u32> for CoinAmount {
    fn from(amount: u32) -> Self {
        CoinAmount(i64::from(amount))
    }
}

impl From<f64> for CoinAmount {
    fn from(amount: f64) -> Self {
        CoinAmount(sanitize_amount(amount))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
