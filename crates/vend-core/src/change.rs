//! # Change Calculation
//!
//! Breaks an amount of cents into coins, largest denomination first.
//!
//! ```text
//! 77¢ ──► Dollar     77 / 100 = 0   rem 77
//!         HalfDollar 77 /  50 = 1   rem 27
//!         Quarter    27 /  25 = 1   rem  2
//!         Dime        2 /  10 = 0   rem  2
//!         Nickel      2 /   5 = 0   rem  2
//!         Penny       2 /   1 = 2   rem  0
//! ```
//!
//! The 100/50/25/10/5/1 system is canonical, so greedy selection always
//! yields the fewest coins. The coffer's stock is not consulted here; the
//! purchase flow checks availability afterwards.

use crate::coin::{Coin, CoinCounts};

/// Computes the minimal-coin breakdown of `cents`.
///
/// Zero or negative amounts yield no coins. Returns `None` when a
/// denomination's count does not fit in a `u32`.
///
/// ## Example
/// ```rust
/// use vend_core::{compute_change, Coin};
///
/// let change = compute_change(77).unwrap();
/// assert_eq!(change.get(Coin::HalfDollar), 1);
/// assert_eq!(change.get(Coin::Quarter), 1);
/// assert_eq!(change.get(Coin::Penny), 2);
/// ```
pub fn compute_change(cents: i64) -> Option<CoinCounts> {
    let mut remaining = cents.max(0);
    let mut change = CoinCounts::default();

    for coin in Coin::ALL {
        let count = remaining / coin.cents();
        remaining %= coin.cents();
        change.set(coin, u32::try_from(count).ok()?);
    }

    Some(change)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Fewest coins for every amount up to `max`, by exhaustive search.
    fn minimal_coin_counts(max: usize) -> Vec<u64> {
        let mut best = vec![u64::MAX; max + 1];
        best[0] = 0;
        for amount in 1..=max {
            for coin in Coin::ALL {
                let value = coin.cents() as usize;
                if value <= amount && best[amount - value] != u64::MAX {
                    best[amount] = best[amount].min(best[amount - value] + 1);
                }
            }
        }
        best
    }

    #[test]
    fn test_known_amounts() {
        assert_eq!(compute_change(0), Some(CoinCounts::default()));
        assert_eq!(compute_change(1), Some(CoinCounts::default().with(Coin::Penny, 1)));
        assert_eq!(
            compute_change(77),
            Some(
                CoinCounts::default()
                    .with(Coin::HalfDollar, 1)
                    .with(Coin::Quarter, 1)
                    .with(Coin::Penny, 2)
            )
        );
        assert_eq!(
            compute_change(291).unwrap(),
            CoinCounts::default()
                .with(Coin::Dollar, 2)
                .with(Coin::HalfDollar, 1)
                .with(Coin::Quarter, 1)
                .with(Coin::Dime, 1)
                .with(Coin::Nickel, 1)
                .with(Coin::Penny, 1)
        );
    }

    #[test]
    fn test_negative_amount_yields_nothing() {
        assert!(compute_change(-50).unwrap().is_empty());
    }

    #[test]
    fn test_change_sums_to_amount() {
        for cents in 0..=1000 {
            assert_eq!(compute_change(cents).unwrap().value().cents(), cents, "amount {}", cents);
        }
    }

    #[test]
    fn test_change_beyond_u32_dollars_is_unrepresentable() {
        let max_dollars = 100 * i64::from(u32::MAX);

        let largest = compute_change(max_dollars + 99).unwrap();
        assert_eq!(largest.get(Coin::Dollar), u32::MAX);
        assert_eq!(largest.value().cents(), max_dollars + 99);

        assert_eq!(compute_change(max_dollars + 100), None);
        assert_eq!(compute_change(i64::MAX), None);
    }

    #[test]
    fn test_change_uses_fewest_coins() {
        let best = minimal_coin_counts(1000);
        for (cents, &fewest) in best.iter().enumerate() {
            assert_eq!(
                compute_change(cents as i64).unwrap().total_coins(),
                fewest,
                "amount {}",
                cents
            );
        }
    }
}
