//! # Coin Commands
//!
//! Administrative access to the coffer.
//!
//! ```text
//! get_coins      ──► read-only snapshot
//! load_coins     ──► several denominations at once, capped at 100 each
//! unload_coins   ──► several denominations at once, all or nothing
//! increment_coin ──► one denomination, by name
//! decrement_coin ──► one denomination, by name
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};
use vend_core::{Coffer, Coin, CoinCounts, CoinPayload, CoreError};

use crate::error::ApiError;
use crate::state::MachineState;

/// Coffer contents as rendered to callers.
///
/// ```json
/// { "coins": { "Dollar": 2, "HalfDollar": 2, ..., "Penny": 100 }, "total": 4.8 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CofferResponse {
    pub coins: CoinCounts,
    /// Dollars
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl From<&Coffer> for CofferResponse {
    fn from(coffer: &Coffer) -> Self {
        CofferResponse {
            coins: coffer.contents(),
            total: coffer.total_value().to_dollars(),
        }
    }
}

/// Gets the coffer contents.
pub fn get_coins(machine: &MachineState) -> Result<CofferResponse, ApiError> {
    debug!("get_coins command");
    Ok(machine.with_machine(|m| CofferResponse::from(m.coffer())))
}

/// Loads coins into the coffer.
///
/// ## Behavior
/// - Fractional counts are truncated
/// - Each denomination is capped at 100 coins
/// - A negative count removes coins; if any denomination would go below
///   zero nothing is loaded
pub fn load_coins(machine: &MachineState, payload: CoinPayload) -> Result<CofferResponse, ApiError> {
    debug!(?payload, "load_coins command");

    let coffer = machine.with_machine_mut(|m| {
        m.coffer_mut().load(&payload)?;
        Ok::<_, CoreError>(CofferResponse::from(m.coffer()))
    })?;

    info!(total = %coffer.total, "Coins loaded");
    Ok(coffer)
}

/// Takes coins out of the coffer.
///
/// Negative and garbage counts are ignored. If any denomination is short,
/// nothing is removed.
pub fn unload_coins(
    machine: &MachineState,
    payload: CoinPayload,
) -> Result<CofferResponse, ApiError> {
    debug!(?payload, "unload_coins command");

    let coins = payload.sanitize();
    let coffer = machine.with_machine_mut(|m| {
        m.coffer_mut().dispense(&coins)?;
        Ok::<_, CoreError>(CofferResponse::from(m.coffer()))
    })?;

    info!(total = %coffer.total, "Coins unloaded");
    Ok(coffer)
}

/// Adds coins of one denomination, named as on the wire (`"HalfDollar"`).
pub fn increment_coin(
    machine: &MachineState,
    coin: &str,
    amount: f64,
) -> Result<CofferResponse, ApiError> {
    debug!(coin = %coin, amount, "increment_coin command");

    let coin = Coin::from_str(coin).map_err(CoreError::from)?;
    let coffer = machine.with_machine_mut(|m| {
        m.coffer_mut().increment(coin, amount)?;
        Ok::<_, CoreError>(CofferResponse::from(m.coffer()))
    })?;
    Ok(coffer)
}

/// Removes coins of one denomination, named as on the wire.
pub fn decrement_coin(
    machine: &MachineState,
    coin: &str,
    amount: f64,
) -> Result<CofferResponse, ApiError> {
    debug!(coin = %coin, amount, "decrement_coin command");

    let coin = Coin::from_str(coin).map_err(CoreError::from)?;
    let coffer = machine.with_machine_mut(|m| {
        m.coffer_mut().decrement(coin, amount)?;
        Ok::<_, CoreError>(CofferResponse::from(m.coffer()))
    })?;
    Ok(coffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_and_get() {
        let machine = MachineState::default();
        let payload = CoinPayload::default()
            .with(Coin::Dollar, 2.0)
            .with(Coin::Penny, 100.0);

        let loaded = load_coins(&machine, payload).unwrap();

        assert_eq!(loaded.total, dec!(3.00));
        assert_eq!(get_coins(&machine).unwrap(), loaded);
    }

    #[test]
    fn test_load_rejects_negative_result() {
        let machine = MachineState::default();
        let err = load_coins(&machine, CoinPayload::default().with(Coin::Dime, -1.0)).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_coins(&machine).unwrap().coins.is_empty());
    }

    #[test]
    fn test_unload_is_all_or_nothing() {
        let machine = MachineState::default();
        load_coins(&machine, CoinPayload::default().with(Coin::Quarter, 4.0)).unwrap();

        let err = unload_coins(
            &machine,
            CoinPayload::default()
                .with(Coin::Quarter, 2.0)
                .with(Coin::Dime, 1.0),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientCoins);
        assert_eq!(get_coins(&machine).unwrap().coins.get(Coin::Quarter), 4);

        let left = unload_coins(&machine, CoinPayload::default().with(Coin::Quarter, 2.0)).unwrap();
        assert_eq!(left.total, dec!(0.50));
    }

    #[test]
    fn test_increment_and_decrement_by_name() {
        let machine = MachineState::default();

        increment_coin(&machine, "HalfDollar", 3.0).unwrap();
        let after = decrement_coin(&machine, "HalfDollar", 1.0).unwrap();
        assert_eq!(after.coins.get(Coin::HalfDollar), 2);

        let err = decrement_coin(&machine, "HalfDollar", 5.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientCoins);

        let err = increment_coin(&machine, "Doubloon", 1.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Unknown coin type: Doubloon");
    }

    #[test]
    fn test_coffer_wire_shape() {
        let machine = MachineState::default();
        let loaded = load_coins(&machine, CoinPayload::default().with(Coin::Nickel, 2.0)).unwrap();

        let json = serde_json::to_value(&loaded).unwrap();
        assert_eq!(json["coins"]["Nickel"], 2);
        assert_eq!(json["total"], 0.1);
    }
}
