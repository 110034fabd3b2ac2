//! # Product Commands
//!
//! Listing for buyers, CRUD for administrators.
//!
//! ## Slot Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add_product ──► ┌──────────┐ ──adjust_quantity / set_price──┐          │
//! │                  │  Listed  │ ◄──────update_product──────────┘          │
//! │                  └──────────┘                                           │
//! │                        │                                                │
//! │                  remove_product  (or sold out under the Remove policy)  │
//! │                        ▼                                                │
//! │                      gone                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};
use vend_core::validation::validate_dollar_price;
use vend_core::{CoreError, NewProductSlot, ProductSlot, SlotUpdate};

use crate::error::ApiError;
use crate::state::MachineState;

/// Product as rendered to callers.
///
/// ```json
/// { "name": "juicebox", "description": "Orange Juice", "quantity": 10, "price": 12.23 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub name: String,
    pub description: String,
    pub quantity: u32,
    /// Dollars, two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<&ProductSlot> for ProductResponse {
    fn from(slot: &ProductSlot) -> Self {
        ProductResponse {
            name: slot.name().to_string(),
            description: slot.description().to_string(),
            quantity: slot.quantity(),
            price: slot.price().to_dollars(),
        }
    }
}

/// Lists every product, in the order they were added.
pub fn list_products(machine: &MachineState) -> Result<Vec<ProductResponse>, ApiError> {
    debug!("list_products command");
    Ok(machine.with_machine(|m| {
        m.ledger()
            .list_products()
            .iter()
            .map(ProductResponse::from)
            .collect()
    }))
}

/// Gets one product by name (case-insensitive).
pub fn get_product(machine: &MachineState, name: &str) -> Result<ProductResponse, ApiError> {
    debug!(name = %name, "get_product command");
    let product =
        machine.with_machine(|m| m.ledger().get_product(name).map(ProductResponse::from))?;
    Ok(product)
}

/// Adds a product slot.
///
/// ## Behavior
/// - Name is trimmed and lower-cased
/// - Quantity above 10 is clamped, fractional quantity is rounded
/// - Price is rounded to cents
///
/// ## Errors
/// - `VALIDATION_ERROR` for any invalid field
/// - `DUPLICATE_PRODUCT` if the name is taken
pub fn add_product(
    machine: &MachineState,
    product: NewProductSlot,
) -> Result<ProductResponse, ApiError> {
    debug!(name = %product.name, "add_product command");

    let slot = product.into_slot().map_err(CoreError::from)?;
    let added = machine.with_machine_mut(|m| {
        m.ledger_mut()
            .add_product(slot)
            .map(ProductResponse::from)
    })?;

    info!(name = %added.name, quantity = added.quantity, price = %added.price, "Product added");
    Ok(added)
}

/// Applies a partial update to a product slot.
///
/// Fields left out of `update` keep their value. Either every provided
/// field is applied or none is.
pub fn update_product(
    machine: &MachineState,
    name: &str,
    update: SlotUpdate,
) -> Result<ProductResponse, ApiError> {
    debug!(name = %name, ?update, "update_product command");

    if update.is_empty() {
        return Err(ApiError::validation("Update must change at least one field"));
    }

    let updated = machine.with_machine_mut(|m| {
        m.ledger_mut()
            .update_product(name, &update)
            .map(ProductResponse::from)
    })?;
    Ok(updated)
}

/// Removes a product slot and returns its final state.
pub fn remove_product(machine: &MachineState, name: &str) -> Result<ProductResponse, ApiError> {
    debug!(name = %name, "remove_product command");

    let removed = machine.with_machine_mut(|m| {
        m.ledger_mut()
            .remove_product(name)
            .map(|s| ProductResponse::from(&s))
    })?;

    info!(name = %removed.name, "Product removed");
    Ok(removed)
}

/// Restocks (positive `delta`) or pulls items (negative `delta`).
pub fn adjust_quantity(
    machine: &MachineState,
    name: &str,
    delta: i64,
) -> Result<ProductResponse, ApiError> {
    debug!(name = %name, delta, "adjust_quantity command");

    let adjusted = machine.with_machine_mut(|m| {
        m.ledger_mut()
            .adjust_quantity(name, delta)
            .map(|s| ProductResponse::from(&s))
    })?;
    Ok(adjusted)
}

/// Replaces a product's price (dollars, rounded to cents).
pub fn set_price(
    machine: &MachineState,
    name: &str,
    price: Decimal,
) -> Result<ProductResponse, ApiError> {
    debug!(name = %name, price = %price, "set_price command");

    let price = validate_dollar_price(price).map_err(CoreError::from)?;
    let updated = machine.with_machine_mut(|m| {
        m.ledger_mut()
            .set_price(name, price)
            .map(ProductResponse::from)
    })?;
    Ok(updated)
}
