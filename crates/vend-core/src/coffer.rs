//! # Coffer
//!
//! The machine's coin reserve: a count per denomination plus a cached total.
//!
//! ## Cached Total
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total == Σ count(coin) × cents(coin)          (always)                 │
//! │                                                                         │
//! │  increment(Quarter, 4) ──► count += 4   total += 4 × 25¢               │
//! │  increment(Quarter, 200) with 90 held                                   │
//! │               ──► count capped at 100   total += 10 × 25¢ (not 200!)   │
//! │  decrement(Dime, 3)    ──► count -= 3   total -= 3 × 10¢               │
//! │                                                                         │
//! │  The total moves by what was actually applied, so reading it never    │
//! │  needs a rescan.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::coin::{Coin, CoinAmount, CoinCounts, CoinPayload};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_COINS_PER_DENOMINATION;

/// Per-denomination coin reserve.
///
/// ## Invariants
/// - Each count is within 0..=MAX_COINS_PER_DENOMINATION
/// - `total_value()` equals the face value of all coins held
/// - A failed operation changes nothing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coffer {
    counts: CoinCounts,
    total: Money,
}

impl Coffer {
    /// Creates an empty coffer (every denomination at zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for one denomination.
    #[inline]
    pub fn get_count(&self, coin: Coin) -> u32 {
        self.counts.get(coin)
    }

    /// Face value of everything held. O(1).
    #[inline]
    pub fn total_value(&self) -> Money {
        self.total
    }

    /// Face value of everything held, in cents.
    #[inline]
    pub fn total_value_cents(&self) -> i64 {
        self.total.cents()
    }

    /// Snapshot of every denomination's count.
    #[inline]
    pub fn contents(&self) -> CoinCounts {
        self.counts
    }

    /// Adds coins of one denomination. A negative amount removes coins.
    ///
    /// ## Behavior
    /// - Fractional amounts are truncated (`1.36` → 1)
    /// - A result above the per-denomination cap is silently capped
    /// - A result below zero fails with `InvalidCoinAmount`
    ///
    /// ## Returns
    /// The new count.
    pub fn increment(&mut self, coin: Coin, amount: impl Into<CoinAmount>) -> CoreResult<u32> {
        let amount = amount.into().get();
        let next = self.checked_next(coin, amount)?;
        self.apply(coin, next);
        debug!(%coin, amount, count = next, total = %self.total, "coins incremented");
        Ok(next)
    }

    /// Removes coins of one denomination.
    ///
    /// ## Errors
    /// - `InsufficientCoins` if more coins are requested than are held
    /// - `InvalidCoinAmount` if the amount is negative
    ///
    /// ## Returns
    /// The new count.
    pub fn decrement(&mut self, coin: Coin, amount: impl Into<CoinAmount>) -> CoreResult<u32> {
        let amount = amount.into().get();
        if amount < 0 {
            return Err(CoreError::InvalidCoinAmount { coin, amount });
        }

        let available = self.get_count(coin);
        if amount > i64::from(available) {
            return Err(CoreError::InsufficientCoins {
                coin,
                requested: u32::try_from(amount).unwrap_or(u32::MAX),
                available,
            });
        }

        let next = available - amount as u32;
        self.apply(coin, next);
        debug!(%coin, amount, count = next, total = %self.total, "coins decremented");
        Ok(next)
    }

    /// Loads several denominations at once (an operator refill).
    ///
    /// Every value is truncated and checked before any count changes; if one
    /// denomination would go negative nothing is loaded.
    ///
    /// ## Returns
    /// The coffer contents after loading.
    pub fn load(&mut self, payload: &CoinPayload) -> CoreResult<CoinCounts> {
        let mut staged = self.counts;
        for coin in Coin::ALL {
            let amount = CoinAmount::from(payload.get(coin)).get();
            staged.set(coin, self.checked_next(coin, amount)?);
        }

        for (coin, count) in staged.iter() {
            self.apply(coin, count);
        }
        debug!(total = %self.total, "coins loaded");
        Ok(self.counts)
    }

    /// Checks that every count in `coins` is available.
    ///
    /// Denominations are checked highest first; the first shortfall is
    /// reported.
    pub fn can_dispense(&self, coins: &CoinCounts) -> CoreResult<()> {
        for (coin, requested) in coins.iter() {
            let available = self.get_count(coin);
            if requested > available {
                return Err(CoreError::InsufficientCoins {
                    coin,
                    requested,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Removes a whole set of coins, or none of them.
    ///
    /// ```text
    /// phase 1: can_dispense(coins)   ── any shortfall ──► Err, coffer untouched
    /// phase 2: apply every decrement ── cannot fail after phase 1
    /// ```
    pub fn dispense(&mut self, coins: &CoinCounts) -> CoreResult<()> {
        self.can_dispense(coins)?;

        for (coin, requested) in coins.iter() {
            let next = self.get_count(coin) - requested;
            self.apply(coin, next);
        }
        debug!(coins = coins.total_coins(), total = %self.total, "coins dispensed");
        Ok(())
    }

    /// Empties every denomination.
    pub fn reset(&mut self) {
        self.counts = CoinCounts::default();
        self.total = Money::zero();
    }

    /// Count after adding `amount`, capped; errors if it would go negative.
    fn checked_next(&self, coin: Coin, amount: i64) -> CoreResult<u32> {
        let next = i64::from(self.get_count(coin)).saturating_add(amount);
        if next < 0 {
            return Err(CoreError::InvalidCoinAmount { coin, amount });
        }
        Ok(next.min(i64::from(MAX_COINS_PER_DENOMINATION)) as u32)
    }

    /// Sets a count and moves the cached total by the applied difference.
    fn apply(&mut self, coin: Coin, next: u32) {
        let applied = i64::from(next) - i64::from(self.get_count(coin));
        self.counts.set(coin, next);
        self.total += coin.value() * applied;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
