//! # Vending Machine
//!
//! The purchase engine: the one place where the ledger and the coffer are
//! used together.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  buy(payload, name)                                                     │
//! │                                                                         │
//! │  1. ledger.get_product(name)          ── NotFound / SoldOut             │
//! │  2. tender = Σ sanitize(count) × cents                                  │
//! │  3. tender < price                    ── InsufficientAmount             │
//! │  4. change = compute_change(tender - price)                             │
//! │  5. coffer.dispense(change)           ── InsufficientCoins              │
//! │        (checks every denomination before touching any)                  │
//! │  ─────────────── nothing has changed above this line ───────────────    │
//! │  6. ledger.adjust_quantity(name, -1)                                    │
//! │  7. Purchase { name, description, price, change }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 6 cannot fail once step 1 found a stocked slot, because `&mut self`
//! rules out any interleaving between the two.
//!
//! Tendered coins are not added to the coffer.

use tracing::{info, warn};

use crate::change::compute_change;
use crate::coffer::Coffer;
use crate::coin::{Coin, CoinPayload};
use crate::error::{CoreError, CoreResult};
use crate::ledger::{Ledger, SoldOutPolicy};
use crate::types::Purchase;

/// Inventory plus coin reserve, owned together.
///
/// There is no global instance: the host constructs one and decides how it
/// is shared.
#[derive(Debug, Clone, Default)]
pub struct VendingMachine {
    ledger: Ledger,
    coffer: Coffer,
}

impl VendingMachine {
    /// Creates an empty machine.
    pub fn new(policy: SoldOutPolicy) -> Self {
        VendingMachine {
            ledger: Ledger::new(policy),
            coffer: Coffer::new(),
        }
    }

    #[inline]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[inline]
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    #[inline]
    pub fn coffer(&self) -> &Coffer {
        &self.coffer
    }

    #[inline]
    pub fn coffer_mut(&mut self) -> &mut Coffer {
        &mut self.coffer
    }

    /// Buys one item of `name` with the tendered coins.
    ///
    /// On any error neither the ledger nor the coffer has changed.
    ///
    /// ## Errors
    /// - `ProductNotFound` if no slot matches `name`
    /// - `SoldOut` if the slot's quantity is 0
    /// - `InsufficientAmount` if the tender is worth less than the price
    /// - `InsufficientCoins` if the coffer cannot pay the change
    pub fn buy(&mut self, payload: &CoinPayload, name: &str) -> CoreResult<Purchase> {
        let slot = self.ledger.get_product(name)?;
        if slot.is_sold_out() {
            warn!(name = slot.name(), "purchase rejected: sold out");
            return Err(CoreError::SoldOut(slot.name().to_string()));
        }

        let tendered = payload.sanitize().value();
        let price = slot.price();
        if tendered < price {
            warn!(name = slot.name(), %tendered, %price, "purchase rejected: insufficient amount");
            return Err(CoreError::InsufficientAmount { tendered, price });
        }

        let Some(change) = compute_change((tendered - price).cents()) else {
            warn!(name = slot.name(), %tendered, %price, "purchase rejected: change too large");
            return Err(CoreError::InsufficientCoins {
                coin: Coin::Dollar,
                requested: u32::MAX,
                available: self.coffer.get_count(Coin::Dollar),
            });
        };
        let purchase = Purchase {
            name: slot.name().to_string(),
            description: slot.description().to_string(),
            price,
            change,
        };

        if let Err(e) = self.coffer.dispense(&change) {
            warn!(name = %purchase.name, error = %e, "purchase rejected: cannot make change");
            return Err(e);
        }
        self.ledger.adjust_quantity(&purchase.name, -1)?;

        info!(
            name = %purchase.name,
            %tendered,
            price = %purchase.price,
            change = %change.value(),
            coffer_total = %self.coffer.total_value(),
            "purchase completed"
        );
        Ok(purchase)
    }

    /// Removes every product and empties the coffer.
    ///
    /// The sold-out policy is kept.
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.coffer.reset();
        info!("machine reset");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
