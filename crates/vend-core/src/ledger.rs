//! # Inventory Ledger
//!
//! Owns the machine's product slots, keyed by normalized name.
//!
//! ## Slot Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   add_product ──► [ listed ] ──adjust/buy──► [ quantity 0 ]            │
//! │                       │                           │                     │
//! │                       │                  SoldOutPolicy::Keep   → stays  │
//! │                       │                  SoldOutPolicy::Remove → gone   │
//! │                       ▼                                                 │
//! │                 remove_product ──► gone                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Slots are kept in insertion order. A machine holds a handful of slots, so
//! lookups scan the list rather than maintaining a separate index.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{ProductSlot, SlotUpdate};
use crate::validation::normalize_name;

// =============================================================================
// Sold-Out Policy
// =============================================================================

/// What happens to a slot whose quantity drops to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoldOutPolicy {
    /// Leave the slot listed with quantity 0.
    #[default]
    Keep,
    /// Delete the slot as soon as it empties.
    Remove,
}

// =============================================================================
// Ledger
// =============================================================================

/// The product inventory.
///
/// ## Invariants
/// - Normalized names are unique
/// - Every slot's quantity is within 0..=MAX_SLOT_QUANTITY
/// - A failed operation leaves the ledger unchanged
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    slots: Vec<ProductSlot>,
    policy: SoldOutPolicy,
}

impl Ledger {
    /// Creates an empty ledger with the given sold-out policy.
    pub fn new(policy: SoldOutPolicy) -> Self {
        Ledger {
            slots: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> SoldOutPolicy {
        self.policy
    }

    /// All slots, in insertion order.
    pub fn list_products(&self) -> &[ProductSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Looks up a slot by name (case and surrounding whitespace ignored).
    pub fn get_product(&self, name: &str) -> CoreResult<&ProductSlot> {
        let index = self.position(name)?;
        Ok(&self.slots[index])
    }

    /// Adds a slot.
    ///
    /// ## Errors
    /// - `DuplicateProduct` if a slot with the same normalized name exists
    pub fn add_product(&mut self, slot: ProductSlot) -> CoreResult<&ProductSlot> {
        if self.find(slot.name()).is_some() {
            return Err(CoreError::DuplicateProduct(slot.name().to_string()));
        }

        debug!(name = slot.name(), quantity = slot.quantity(), price = %slot.price(), "product added");
        self.slots.push(slot);
        Ok(&self.slots[self.slots.len() - 1])
    }

    /// Removes a slot and returns it.
    pub fn remove_product(&mut self, name: &str) -> CoreResult<ProductSlot> {
        let index = self.position(name)?;
        let slot = self.slots.remove(index);
        debug!(name = slot.name(), "product removed");
        Ok(slot)
    }

    /// Adds `delta` (which may be negative) to a slot's quantity.
    ///
    /// ## Behavior
    /// ```text
    /// quantity + delta < 0   ──► InvalidQuantity, nothing changes
    /// quantity + delta > 10  ──► 10
    /// quantity + delta == 0  ──► SoldOutPolicy decides whether the slot stays
    /// ```
    ///
    /// ## Returns
    /// The updated slot. When the policy removed it, this is the final state
    /// (quantity 0) of a slot that is no longer listed.
    pub fn adjust_quantity(&mut self, name: &str, delta: i64) -> CoreResult<ProductSlot> {
        let index = self.position(name)?;
        let slot = &mut self.slots[index];

        let next = i64::from(slot.quantity()).saturating_add(delta);
        if next < 0 {
            return Err(ValidationError::InvalidQuantity {
                reason: format!(
                    "{} {} would leave {}, quantity must not be less than 0",
                    slot.name(),
                    delta,
                    next
                ),
            }
            .into());
        }
        slot.set_quantity(next)?;
        debug!(name = slot.name(), delta, quantity = slot.quantity(), "quantity adjusted");

        if slot.is_sold_out() && self.policy == SoldOutPolicy::Remove {
            let removed = self.slots.remove(index);
            debug!(name = removed.name(), "sold-out product removed");
            return Ok(removed);
        }

        Ok(self.slots[index].clone())
    }

    /// Replaces a slot's price.
    pub fn set_price(&mut self, name: &str, price: Money) -> CoreResult<&ProductSlot> {
        let index = self.position(name)?;
        self.slots[index].set_price(price)?;
        debug!(name = self.slots[index].name(), price = %price, "price updated");
        Ok(&self.slots[index])
    }

    /// Applies a partial update to a slot.
    ///
    /// Every provided field is validated before anything changes. A rename
    /// keeps the slot's position in the listing. Setting the quantity to 0
    /// here is an explicit administrative choice and never triggers the
    /// sold-out policy.
    ///
    /// ## Errors
    /// - `ProductNotFound` if `name` matches no slot
    /// - `DuplicateProduct` if the new name belongs to another slot
    /// - `Validation` for any invalid field
    pub fn update_product(&mut self, name: &str, update: &SlotUpdate) -> CoreResult<&ProductSlot> {
        let index = self.position(name)?;
        let next = self.slots[index].with_update(update)?;

        if let Some(other) = self.find(next.name()) {
            if other != index {
                return Err(CoreError::DuplicateProduct(next.name().to_string()));
            }
        }

        self.slots[index] = next;
        debug!(name = self.slots[index].name(), "product updated");
        Ok(&self.slots[index])
    }

    /// Removes every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn find(&self, name: &str) -> Option<usize> {
        let key = normalize_name(name);
        self.slots.iter().position(|slot| slot.name() == key)
    }

    fn position(&self, name: &str) -> CoreResult<usize> {
        self.find(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::MAX_SLOT_QUANTITY;
    use rust_decimal_macros::dec;

    fn slot(name: &str, quantity: i64, cents: i64) -> ProductSlot {
        ProductSlot::new(name, "A tasty snack", quantity, Money::from_cents(cents)).unwrap()
    }

    fn stocked() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.add_product(slot("JuiceBox", 10, 1223)).unwrap();
        ledger.add_product(slot("Crisps", 5, 1048)).unwrap();
        ledger
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let ledger = stocked();
        let names: Vec<&str> = ledger.list_products().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["juicebox", "crisps"]);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_get_product_normalizes_lookup() {
        let ledger = stocked();
        assert_eq!(ledger.get_product("  JUICEBOX ").unwrap().name(), "juicebox");

        let err = ledger.get_product("abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Product abc not found");
    }

    #[test]
    fn test_duplicate_rejected_on_normalized_name() {
        let mut ledger = stocked();
        let err = ledger.add_product(slot("  crisps  ", 1, 100)).unwrap_err();

        assert_eq!(err, CoreError::DuplicateProduct("crisps".to_string()));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get_product("crisps").unwrap().quantity(), 5);
    }

    #[test]
    fn test_remove_product() {
        let mut ledger = stocked();

        let removed = ledger.remove_product("JuiceBox").unwrap();
        assert_eq!(removed.name(), "juicebox");
        assert_eq!(ledger.len(), 1);

        assert_eq!(
            ledger.remove_product("JuiceBox").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_adjust_quantity_clamps_and_rejects_negative() {
        let mut ledger = stocked();

        let err = ledger.adjust_quantity("JuiceBox", -1000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);
        assert_eq!(ledger.get_product("JuiceBox").unwrap().quantity(), 10);

        let updated = ledger.adjust_quantity("Crisps", 50).unwrap();
        assert_eq!(updated.quantity(), MAX_SLOT_QUANTITY);

        let updated = ledger.adjust_quantity("Crisps", -3).unwrap();
        assert_eq!(updated.quantity(), 7);

        assert_eq!(
            ledger.adjust_quantity("abc", 1).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_sold_out_policy_keep() {
        let mut ledger = stocked();
        let updated = ledger.adjust_quantity("Crisps", -5).unwrap();

        assert!(updated.is_sold_out());
        assert!(ledger.get_product("Crisps").unwrap().is_sold_out());
    }

    #[test]
    fn test_sold_out_policy_remove() {
        let mut ledger = Ledger::new(SoldOutPolicy::Remove);
        ledger.add_product(slot("Crisps", 5, 1048)).unwrap();

        let last = ledger.adjust_quantity("Crisps", -5).unwrap();

        assert_eq!(last.quantity(), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_set_price() {
        let mut ledger = stocked();

        let updated = ledger.set_price("JuiceBox", Money::from_cents(4857)).unwrap();
        assert_eq!(updated.price().cents(), 4857);

        let err = ledger.set_price("JuiceBox", Money::from_cents(-1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPrice);
        assert_eq!(ledger.get_product("JuiceBox").unwrap().price().cents(), 4857);
    }

    #[test]
    fn test_update_product_rename_keeps_position() {
        let mut ledger = stocked();
        let update = SlotUpdate {
            name: Some("Apple Box".to_string()),
            price: Some(dec!(1.5)),
            ..SlotUpdate::default()
        };

        let updated = ledger.update_product("juicebox", &update).unwrap();
        assert_eq!(updated.name(), "apple box");
        assert_eq!(updated.price().cents(), 150);

        assert_eq!(ledger.list_products()[0].name(), "apple box");
        assert!(ledger.get_product("juicebox").is_err());
    }

    #[test]
    fn test_update_product_rename_to_existing_name_fails() {
        let mut ledger = stocked();
        let update = SlotUpdate {
            name: Some("CRISPS".to_string()),
            quantity: Some(1.0),
            ..SlotUpdate::default()
        };

        let err = ledger.update_product("juicebox", &update).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateProduct);
        assert_eq!(ledger.get_product("juicebox").unwrap().quantity(), 10);
    }

    #[test]
    fn test_update_product_same_name_different_case() {
        let mut ledger = stocked();
        let update = SlotUpdate {
            name: Some("JUICEBOX".to_string()),
            ..SlotUpdate::default()
        };

        assert_eq!(ledger.update_product("juicebox", &update).unwrap().name(), "juicebox");
    }

    #[test]
    fn test_update_product_invalid_field_changes_nothing() {
        let mut ledger = stocked();
        let update = SlotUpdate {
            quantity: Some(3.0),
            description: Some("bad".to_string()),
            ..SlotUpdate::default()
        };

        let err = ledger.update_product("crisps", &update).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDescription);
        assert_eq!(ledger.get_product("crisps").unwrap().quantity(), 5);
    }

    #[test]
    fn test_clear() {
        let mut ledger = stocked();
        ledger.clear();
        assert!(ledger.is_empty());
    }
}
