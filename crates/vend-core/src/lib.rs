//! # vend-core: Pure Business Logic for the Vending Machine
//!
//! This crate is the **heart** of the machine. It holds the product inventory,
//! the coin reserve, and the purchase flow that ties them together, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             HTTP adapter (routes, auth, schemas)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vend-host (commands, lock)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vend-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  ledger   │  │  coffer   │  │  change   │  │  machine  │  │   │
//! │  │   │  slots    │  │  coins    │  │  greedy   │  │  buy()    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO GLOBALS                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`coin`] - The six USD denominations and per-denomination counts
//! - [`types`] - Product slots and purchase results
//! - [`validation`] - Field rules shared by construction and mutation
//! - [`ledger`] - Inventory ledger keyed by normalized name
//! - [`coffer`] - Coin reserve with a cached total
//! - [`change`] - Minimal-coin change calculation
//! - [`machine`] - Purchase engine over ledger + coffer
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use vend_core::{Coin, CoinPayload, NewProductSlot, VendingMachine};
//!
//! let mut machine = VendingMachine::default();
//! machine
//!     .ledger_mut()
//!     .add_product(
//!         NewProductSlot {
//!             name: "Crisps".to_string(),
//!             description: "Potato crisps".to_string(),
//!             quantity: 5.0,
//!             price: Decimal::new(75, 2), // $0.75
//!         }
//!         .into_slot()
//!         .unwrap(),
//!     )
//!     .unwrap();
//! machine.coffer_mut().increment(Coin::Quarter, 4).unwrap();
//!
//! let payload = CoinPayload::default().with(Coin::Dollar, 1.0);
//! let purchase = machine.buy(&payload, "crisps").unwrap();
//! assert_eq!(purchase.change.get(Coin::Quarter), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod coffer;
pub mod coin;
pub mod error;
pub mod ledger;
pub mod machine;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::compute_change;
pub use coffer::Coffer;
pub use coin::{Coin, CoinAmount, CoinCounts, CoinPayload};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use ledger::{Ledger, SoldOutPolicy};
pub use machine::VendingMachine;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items held by a single product slot.
///
/// ## Business Reason
/// Physical upper limit of a slot's spiral. Larger quantities are clamped,
/// never rejected.
pub const MAX_SLOT_QUANTITY: u32 = 10;

/// Maximum coins held per denomination in the coffer.
pub const MAX_COINS_PER_DENOMINATION: u32 = 100;

/// Minimum description length, in characters.
pub const MIN_DESCRIPTION_LEN: usize = 5;
