//! # Validation Module
//!
//! Field rules for product slots and raw coin amounts.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP adapter (outside this repo)                             │
//! │  └── Field presence and JSON types                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Slot construction (NewProductSlot::into_slot)                     │
//! │  └── Slot mutation (Ledger::update_product, set_price, ...)            │
//! │                                                                         │
//! │  The same functions back both paths, so a slot can never be put into   │
//! │  a state it could not have been created in.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::validation::{normalize_name, validate_quantity};
//!
//! assert_eq!(normalize_name("  JuiceBox "), "juicebox");
//! assert_eq!(validate_quantity(20).unwrap(), 10); // clamped, not rejected
//! assert!(validate_quantity(-1).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_SLOT_QUANTITY, MIN_DESCRIPTION_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Sanitizers
// =============================================================================

/// Drops the fractional part of a raw amount.
///
/// NaN becomes 0 and out-of-range values saturate at the `i64` bounds.
#[inline]
pub fn sanitize_amount(raw: f64) -> i64 {
    raw.trunc() as i64
}

/// Case-folds and trims a product name into its lookup key.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates and normalizes a product name.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The normalized name, which is what the slot stores.
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return Err(ValidationError::InvalidName);
    }
    Ok(normalized)
}

/// Validates a product description.
///
/// ## Rules
/// - At least [`MIN_DESCRIPTION_LEN`] characters (not bytes)
pub fn validate_description(description: &str) -> ValidationResult<String> {
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::InvalidDescription {
            min: MIN_DESCRIPTION_LEN,
        });
    }
    Ok(description.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a slot quantity.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  qty < 0   ──► InvalidQuantity                                          │
/// │  qty > 10  ──► 10 (clamped to the slot's physical capacity)             │
/// │  otherwise ──► qty                                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty < 0 {
        return Err(ValidationError::InvalidQuantity {
            reason: format!("{} must not be less than 0", qty),
        });
    }

    Ok(u32::try_from(qty).map_or(MAX_SLOT_QUANTITY, |q| q.min(MAX_SLOT_QUANTITY)))
}

/// Rounds a raw quantity to the nearest whole number, then validates it.
///
/// `4.5` rounds to 5 and `-0.4` rounds to 0.
pub fn validate_raw_quantity(raw: f64) -> ValidationResult<u32> {
    if raw.is_nan() {
        return Err(ValidationError::InvalidQuantity {
            reason: "not a number".to_string(),
        });
    }
    validate_quantity(raw.round() as i64)
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<Money> {
    if price.is_negative() {
        return Err(ValidationError::InvalidPrice {
            reason: format!("{} must not be less than 0", price),
        });
    }
    Ok(price)
}

/// Converts a dollar price to cents and validates it.
///
/// The sign is checked before rounding, so `-0.001` is rejected rather than
/// rounding to a free item.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use vend_core::validation::validate_dollar_price;
///
/// assert_eq!(validate_dollar_price(Decimal::new(122345, 4)).unwrap().cents(), 1223);
/// assert!(validate_dollar_price(Decimal::new(-2345, 2)).is_err());
/// ```
pub fn validate_dollar_price(dollars: Decimal) -> ValidationResult<Money> {
    if dollars.is_sign_negative() && !dollars.is_zero() {
        return Err(ValidationError::InvalidPrice {
            reason: format!("{} must not be less than 0", dollars),
        });
    }

    let price = Money::from_dollars(dollars).ok_or_else(|| ValidationError::InvalidPrice {
        reason: format!("{} is out of range", dollars),
    })?;
    validate_price(price)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sanitize_amount() {
        assert_eq!(sanitize_amount(1.36), 1);
        assert_eq!(sanitize_amount(-30.7), -30);
        assert_eq!(sanitize_amount(f64::NAN), 0);
        assert_eq!(sanitize_amount(1e300), i64::MAX);
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("JuiceBox").unwrap(), "juicebox");
        assert_eq!(validate_name("  Crisps\t").unwrap(), "crisps");
        assert_eq!(validate_name(""), Err(ValidationError::InvalidName));
        assert_eq!(validate_name("   "), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("Orange Juice").is_ok());
        assert!(validate_description("Chips").is_ok());
        assert!(validate_description("abc").is_err());
        // five characters, ten bytes
        assert!(validate_description("ééééé").is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(0).unwrap(), 0);
        assert_eq!(validate_quantity(5).unwrap(), 5);
        assert_eq!(validate_quantity(10).unwrap(), 10);
        assert_eq!(validate_quantity(20).unwrap(), 10);
        assert_eq!(validate_quantity(i64::MAX).unwrap(), 10);
        assert!(validate_quantity(-4).is_err());
    }

    #[test]
    fn test_validate_raw_quantity_rounds() {
        assert_eq!(validate_raw_quantity(4.5).unwrap(), 5);
        assert_eq!(validate_raw_quantity(4.4).unwrap(), 4);
        assert_eq!(validate_raw_quantity(-0.4).unwrap(), 0);
        assert_eq!(validate_raw_quantity(99.9).unwrap(), 10);
        assert!(validate_raw_quantity(-0.6).is_err());
        assert!(validate_raw_quantity(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_dollar_price() {
        assert_eq!(validate_dollar_price(dec!(12.2345)).unwrap().cents(), 1223);
        assert_eq!(validate_dollar_price(dec!(48.567)).unwrap().cents(), 4857);
        assert_eq!(validate_dollar_price(dec!(0)).unwrap().cents(), 0);
        assert!(validate_dollar_price(dec!(-23.45)).is_err());
        assert!(validate_dollar_price(dec!(-0.001)).is_err());
    }
}
