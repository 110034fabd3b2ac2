//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vend-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule failures                         │
//! │  └── ValidationError  - Field rule failures                            │
//! │                                                                         │
//! │  vend-host errors (separate crate)                                     │
//! │  └── ApiError         - What the HTTP adapter sees (code + message)    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, coin, counts)
//! 3. Errors are enum variants, never String
//! 4. Every failure leaves the machine untouched - nothing here is retryable
//!    and nothing is fatal

use thiserror::Error;

use crate::coin::Coin;
use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No slot matches the normalized product name.
    #[error("Product {0} not found")]
    ProductNotFound(String),

    /// A slot with the same normalized name already exists.
    #[error("Product {0} already exists")]
    DuplicateProduct(String),

    /// The slot exists but holds no items.
    #[error("Product {0} is sold out")]
    SoldOut(String),

    /// Tender is worth less than the product price.
    #[error("Amount given {tendered} is less than price {price}")]
    InsufficientAmount { tendered: Money, price: Money },

    /// The coffer cannot cover a decrement or the change for a purchase.
    ///
    /// ## User Workflow
    /// ```text
    /// Buy (tender: 3 × Dollar, price: $2.23)
    ///      │
    ///      ▼
    /// Change needed: 77¢ = HalfDollar + Quarter + 2 × Penny
    ///      │
    ///      ▼
    /// Coffer has 0 HalfDollars
    ///      │
    ///      ▼
    /// InsufficientCoins { coin: HalfDollar, requested: 1, available: 0 }
    ///      │
    ///      ▼
    /// Nothing dispensed, nothing vended
    /// ```
    #[error("Not enough {coin} coins in the machine: requested {requested}, available {available}")]
    InsufficientCoins {
        coin: Coin,
        requested: u32,
        available: u32,
    },

    /// A coin adjustment would drive a denomination negative.
    #[error("Invalid {coin} amount {amount}: coin count must not be less than 0")]
    InvalidCoinAmount { coin: Coin, amount: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Raised both when a slot is constructed and when one of its fields is
/// changed later; the rules are the same in both places.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty once trimmed.
    #[error("Name must not be empty")]
    InvalidName,

    /// Description is shorter than the minimum.
    #[error("Description must be at least {min} characters")]
    InvalidDescription { min: usize },

    /// Quantity is negative or not a number.
    #[error("Invalid quantity: {reason}")]
    InvalidQuantity { reason: String },

    /// Price is negative or out of range.
    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },

    /// Key is not one of the six denominations.
    #[error("Unknown coin type: {0}")]
    UnknownCoin(String),
}

// =============================================================================
// Error Kind
// =============================================================================

/// Flat classification of every failure the core can produce.
///
/// Lets an adapter map failures to status codes without matching on
/// nested variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    DuplicateProduct,
    SoldOut,
    InvalidName,
    InvalidDescription,
    InvalidQuantity,
    InvalidPrice,
    UnknownCoin,
    InvalidCoinAmount,
    InsufficientCoins,
    InsufficientAmount,
}

impl CoreError {
    /// Returns the flat kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ProductNotFound(_) => ErrorKind::NotFound,
            CoreError::DuplicateProduct(_) => ErrorKind::DuplicateProduct,
            CoreError::SoldOut(_) => ErrorKind::SoldOut,
            CoreError::InsufficientAmount { .. } => ErrorKind::InsufficientAmount,
            CoreError::InsufficientCoins { .. } => ErrorKind::InsufficientCoins,
            CoreError::InvalidCoinAmount { .. } => ErrorKind::InvalidCoinAmount,
            CoreError::Validation(e) => e.kind(),
        }
    }
}

impl ValidationError {
    /// Returns the flat kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidName => ErrorKind::InvalidName,
            ValidationError::InvalidDescription { .. } => ErrorKind::InvalidDescription,
            ValidationError::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
            ValidationError::InvalidPrice { .. } => ErrorKind::InvalidPrice,
            ValidationError::UnknownCoin(_) => ErrorKind::UnknownCoin,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Product abc not found");

        let err = CoreError::InsufficientAmount {
            tendered: Money::from_cents(7),
            price: Money::from_cents(223),
        };
        assert_eq!(
            err.to_string(),
            "Amount given $0.07 is less than price $2.23"
        );

        let err = CoreError::InsufficientCoins {
            coin: Coin::HalfDollar,
            requested: 1,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "Not enough HalfDollar coins in the machine: requested 1, available 0"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::InvalidDescription { min: 5 }.to_string(),
            "Description must be at least 5 characters"
        );
        assert_eq!(ValidationError::InvalidName.to_string(), "Name must not be empty");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::InvalidName.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.kind(), ErrorKind::InvalidName);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            CoreError::DuplicateProduct("crisps".into()).kind(),
            ErrorKind::DuplicateProduct
        );
        assert_eq!(
            CoreError::InvalidCoinAmount {
                coin: Coin::Dime,
                amount: -1
            }
            .kind(),
            ErrorKind::InvalidCoinAmount
        );
        assert_eq!(
            CoreError::from(ValidationError::UnknownCoin("Euro".into())).kind(),
            ErrorKind::UnknownCoin
        );
    }
}
