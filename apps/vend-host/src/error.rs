//! # API Error Type
//!
//! Unified error type for host commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  HTTP adapter               vend-host                                   │
//! │  ────────────               ─────────                                   │
//! │                                                                         │
//! │  POST /buy                                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Core Error? ─── CoreError::SoldOut("crisps") ──► ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄─── status = err.http_status()                                        │
//! │       body   = { "code": "SOLD_OUT", "message": "Product crisps ..." }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use vend_core::{CoreError, ErrorKind};

use crate::state::ConfigError;

/// API error returned from host commands.
///
/// ## Serialization
/// This is what the adapter puts in the response body:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product abc not found"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not found (404)
    NotFound,

    /// A field failed validation (400)
    ValidationError,

    /// Product name already taken (400)
    DuplicateProduct,

    /// Product has no items left (400)
    SoldOut,

    /// Tender is worth less than the price (400)
    InsufficientAmount,

    /// Coffer cannot pay the change or the unload (400)
    InsufficientCoins,

    /// Host misconfigured (500)
    ConfigError,
}

impl ErrorCode {
    /// HTTP status the adapter should answer with.
    pub const fn http_status(&self) -> u16 {
        match self {
            ErrorCode::NotFound => 404,
            ErrorCode::ValidationError
            | ErrorCode::DuplicateProduct
            | ErrorCode::SoldOut
            | ErrorCode::InsufficientAmount
            | ErrorCode::InsufficientCoins => 400,
            ErrorCode::ConfigError => 500,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// HTTP status for this error.
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match err.kind() {
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::DuplicateProduct => ErrorCode::DuplicateProduct,
            ErrorKind::SoldOut => ErrorCode::SoldOut,
            ErrorKind::InsufficientAmount => ErrorCode::InsufficientAmount,
            ErrorKind::InsufficientCoins => ErrorCode::InsufficientCoins,
            ErrorKind::InvalidName
            | ErrorKind::InvalidDescription
            | ErrorKind::InvalidQuantity
            | ErrorKind::InvalidPrice
            | ErrorKind::UnknownCoin
            | ErrorKind::InvalidCoinAmount => ErrorCode::ValidationError,
        };

        // Validation errors already carry their own message
        let message = match err {
            CoreError::Validation(e) => e.to_string(),
            other => other.to_string(),
        };

        ApiError::new(code, message)
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use vend_core::{Coin, Money, ValidationError};

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(CoreError::ProductNotFound("abc".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.http_status(), 404);
        assert_eq!(err.message, "Product abc not found");
    }

    #[test]
    fn test_business_errors_map_to_400() {
        let errors = [
            CoreError::DuplicateProduct("crisps".to_string()),
            CoreError::SoldOut("crisps".to_string()),
            CoreError::InsufficientAmount {
                tendered: Money::from_cents(7),
                price: Money::from_cents(223),
            },
            CoreError::InsufficientCoins {
                coin: Coin::HalfDollar,
                requested: 1,
                available: 0,
            },
            CoreError::InvalidCoinAmount {
                coin: Coin::Dime,
                amount: -3,
            },
        ];

        for err in errors {
            assert_eq!(ApiError::from(err).http_status(), 400);
        }
    }

    #[test]
    fn test_validation_error_unwraps_message() {
        let err = ApiError::from(CoreError::from(ValidationError::InvalidName));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Name must not be empty");
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let err = ApiError::from(ConfigError::InvalidValue("VEND_SOLD_OUT_POLICY".to_string()));
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(CoreError::SoldOut("crisps".to_string()));
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "SOLD_OUT");
        assert_eq!(json["message"], "Product crisps is sold out");
    }
}
