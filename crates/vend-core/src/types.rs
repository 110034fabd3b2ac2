//! # Domain Types
//!
//! Product slots and the records that describe changes to them.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ NewProductSlot  │   │  ProductSlot    │   │   Purchase      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  raw input      │──►│  name (key)     │──►│  name           │       │
//! │  │  qty: f64       │   │  description    │   │  description    │       │
//! │  │  price: Decimal │   │  quantity ≤ 10  │   │  price          │       │
//! │  └─────────────────┘   │  price (cents)  │   │  change         │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │  ┌─────────────────┐          ▲                                         │
//! │  │   SlotUpdate    │──────────┘  (all fields optional, all validated)   │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coin::CoinCounts;
use crate::money::Money;
use crate::validation::{
    validate_description, validate_dollar_price, validate_name, validate_price, validate_quantity,
    validate_raw_quantity, ValidationResult,
};

// =============================================================================
// Product Slot
// =============================================================================

/// One purchasable position in the machine.
///
/// Fields are private: every change goes through a validating method, so a
/// slot always satisfies the same rules it was created under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ProductSlot {
    /// Normalized (trimmed, lower-cased) name. Also the ledger key.
    name: String,

    /// Free text, at least five characters.
    description: String,

    /// Items left, 0..=10.
    quantity: u32,

    /// Price in cents.
    price: Money,
}

impl ProductSlot {
    /// Creates a slot from already-typed values.
    ///
    /// Quantities above the slot capacity are clamped; negative quantities
    /// and prices are rejected.
    pub fn new(name: &str, description: &str, quantity: i64, price: Money) -> ValidationResult<Self> {
        Ok(ProductSlot {
            name: validate_name(name)?,
            description: validate_description(description)?,
            quantity: validate_quantity(quantity)?,
            price: validate_price(price)?,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Checks if the slot is empty.
    #[inline]
    pub fn is_sold_out(&self) -> bool {
        self.quantity == 0
    }

    /// Replaces the name. Callers holding the slot in a ledger must go
    /// through [`crate::Ledger::update_product`] so the key follows.
    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> ValidationResult<()> {
        self.description = validate_description(description)?;
        Ok(())
    }

    /// Replaces the quantity (clamped to the slot capacity).
    pub fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        self.quantity = validate_quantity(quantity)?;
        Ok(())
    }

    pub fn set_price(&mut self, price: Money) -> ValidationResult<()> {
        self.price = validate_price(price)?;
        Ok(())
    }

    /// Returns a copy of this slot with `update` applied.
    ///
    /// Either every provided field is valid and the copy carries all of
    /// them, or an error is returned and `self` is untouched.
    pub fn with_update(&self, update: &SlotUpdate) -> ValidationResult<Self> {
        let mut next = self.clone();

        if let Some(name) = &update.name {
            next.set_name(name)?;
        }
        if let Some(description) = &update.description {
            next.set_description(description)?;
        }
        if let Some(quantity) = update.quantity {
            next.quantity = validate_raw_quantity(quantity)?;
        }
        if let Some(price) = update.price {
            next.price = validate_dollar_price(price)?;
        }

        Ok(next)
    }
}

// =============================================================================
// New Product Slot
// =============================================================================

/// A slot as submitted by an administrator, before validation.
///
/// ## Rounding
/// - `quantity` is rounded to the nearest whole number (`4.5` → 5)
/// - `price` is rounded to cents, half away from zero (`12.2345` → $12.23)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProductSlot {
    pub name: String,
    pub description: String,
    pub quantity: f64,
    pub price: Decimal,
}

impl NewProductSlot {
    /// Validates the raw fields and builds the slot.
    pub fn into_slot(self) -> ValidationResult<ProductSlot> {
        Ok(ProductSlot {
            name: validate_name(&self.name)?,
            description: validate_description(&self.description)?,
            quantity: validate_raw_quantity(self.quantity)?,
            price: validate_dollar_price(self.price)?,
        })
    }
}

// =============================================================================
// Slot Update
// =============================================================================

/// Partial update of a slot. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<Decimal>,
}

impl SlotUpdate {
    /// Checks if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// Outcome of a successful purchase.
///
/// Product fields are a snapshot taken before the slot's quantity was
/// decremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Purchase {
    pub name: String,
    pub description: String,
    pub price: Money,
    /// Coins handed back to the buyer; all six denominations present.
    pub change: CoinCounts,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use rust_decimal_macros::dec;

    fn juice_box() -> NewProductSlot {
        NewProductSlot {
            name: "JuiceBox".to_string(),
            description: "Orange Juice".to_string(),
            quantity: 10.0,
            price: dec!(12.2345),
        }
    }

    #[test]
    fn test_new_slot_rounds_price_and_normalizes_name() {
        let slot = juice_box().into_slot().unwrap();

        assert_eq!(slot.name(), "juicebox");
        assert_eq!(slot.description(), "Orange Juice");
        assert_eq!(slot.quantity(), 10);
        assert_eq!(slot.price().cents(), 1223);
    }

    #[test]
    fn test_new_slot_clamps_quantity() {
        let slot = NewProductSlot {
            quantity: 20.0,
            ..juice_box()
        }
        .into_slot()
        .unwrap();

        assert_eq!(slot.quantity(), crate::MAX_SLOT_QUANTITY);
    }

    #[test]
    fn test_new_slot_rounds_fractional_quantity() {
        let slot = NewProductSlot {
            quantity: 4.6,
            ..juice_box()
        }
        .into_slot()
        .unwrap();

        assert_eq!(slot.quantity(), 5);
    }

    #[test]
    fn test_new_slot_rejects_invalid_fields() {
        let invalid = |slot: NewProductSlot| slot.into_slot().unwrap_err();

        assert_eq!(
            invalid(NewProductSlot {
                name: String::new(),
                ..juice_box()
            }),
            ValidationError::InvalidName
        );
        assert!(matches!(
            invalid(NewProductSlot {
                description: "abc".to_string(),
                ..juice_box()
            }),
            ValidationError::InvalidDescription { .. }
        ));
        assert!(matches!(
            invalid(NewProductSlot {
                quantity: -4.0,
                ..juice_box()
            }),
            ValidationError::InvalidQuantity { .. }
        ));
        assert!(matches!(
            invalid(NewProductSlot {
                price: dec!(-23.45),
                ..juice_box()
            }),
            ValidationError::InvalidPrice { .. }
        ));
    }

    #[test]
    fn test_new_slot_deserializes_json_numbers() {
        let raw: NewProductSlot = serde_json::from_str(
            r#"{"name": "Crisps", "description": "Potato crisps", "quantity": 5, "price": 10.48}"#,
        )
        .unwrap();
        let slot = raw.into_slot().unwrap();

        assert_eq!(slot.quantity(), 5);
        assert_eq!(slot.price().cents(), 1048);
    }

    #[test]
    fn test_setters_validate() {
        let mut slot = ProductSlot::new("Crisps", "Potato crisps", 5, Money::from_cents(1048)).unwrap();

        assert!(slot.set_quantity(-1).is_err());
        assert_eq!(slot.quantity(), 5);

        slot.set_quantity(15).unwrap();
        assert_eq!(slot.quantity(), 10);

        assert!(slot.set_price(Money::from_cents(-5)).is_err());
        assert_eq!(slot.price().cents(), 1048);

        assert!(slot.set_description("tiny").is_err());
        assert!(slot.set_name(" ").is_err());
        assert_eq!(slot.name(), "crisps");
    }

    #[test]
    fn test_with_update_is_all_or_nothing() {
        let slot = juice_box().into_slot().unwrap();
        let update = SlotUpdate {
            description: Some("Apple Juice".to_string()),
            price: Some(dec!(-1)),
            ..SlotUpdate::default()
        };

        assert!(slot.with_update(&update).is_err());
        assert_eq!(slot.description(), "Orange Juice");

        let update = SlotUpdate {
            description: Some("Apple Juice".to_string()),
            price: Some(dec!(48.567)),
            ..SlotUpdate::default()
        };
        let next = slot.with_update(&update).unwrap();
        assert_eq!(next.description(), "Apple Juice");
        assert_eq!(next.price().cents(), 4857);
        assert_eq!(next.quantity(), slot.quantity());
    }

    #[test]
    fn test_slot_update_is_empty() {
        assert!(SlotUpdate::default().is_empty());
        assert!(!SlotUpdate {
            quantity: Some(1.0),
            ..SlotUpdate::default()
        }
        .is_empty());
    }
}
