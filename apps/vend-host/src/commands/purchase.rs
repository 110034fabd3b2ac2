//! # Purchase Command
//!
//! The one public command that mutates the machine.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Buyer inserts coins, picks "juicebox"                                  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  buy_product({ name: "juicebox", payload: { "Dollar": 3 } })            │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  lock machine                                                  │    │
//! │  │  1. find product, check stock                                  │    │
//! │  │  2. check tender covers price                                  │    │
//! │  │  3. compute change, check coffer can pay it                    │    │
//! │  │  4. dispense change, decrement stock                           │    │
//! │  │  unlock                                                        │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  { name, description, price: 2.23,                                      │
//! │    change: { Dollar: 0, HalfDollar: 1, Quarter: 1, ..., Penny: 2 } }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vend_core::{CoinCounts, CoinPayload, Purchase};

use crate::error::ApiError;
use crate::state::MachineState;

/// A buyer's request: which product, paid with which coins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyRequest {
    pub name: String,

    /// Tendered coins; missing denominations count as zero
    #[serde(default)]
    pub payload: CoinPayload,
}

/// The order handed back after a successful purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub name: String,
    pub description: String,
    /// Dollars, two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// All six denominations, zero-filled
    pub change: CoinCounts,
}

impl From<Purchase> for OrderResponse {
    fn from(purchase: Purchase) -> Self {
        OrderResponse {
            name: purchase.name,
            description: purchase.description,
            price: purchase.price.to_dollars(),
            change: purchase.change,
        }
    }
}

/// Buys one item.
///
/// ## Errors
/// - `NOT_FOUND` if the product does not exist
/// - `SOLD_OUT` if the product has no items left
/// - `INSUFFICIENT_AMOUNT` if the coins are worth less than the price
/// - `INSUFFICIENT_COINS` if the machine cannot make change
///
/// On any error the machine is unchanged.
pub fn buy_product(machine: &MachineState, request: BuyRequest) -> Result<OrderResponse, ApiError> {
    debug!(name = %request.name, "buy_product command");

    let purchase = machine.with_machine_mut(|m| m.buy(&request.payload, &request.name))?;
    Ok(OrderResponse::from(purchase))
}
