//! # Configuration State
//!
//! Host configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VEND_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::env;

use serde::{Deserialize, Serialize};
use vend_core::SoldOutPolicy;

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Display name of the machine (shown by the adapter, logged at startup)
    pub machine_name: String,

    /// What happens to a slot that sells out
    pub sold_out_policy: SoldOutPolicy,

    /// tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Name: "Vending Machine"
    /// - Sold-out slots: kept
    /// - Logging: info, debug for vend crates
    fn default() -> Self {
        ConfigState {
            machine_name: "Vending Machine".to_string(),
            sold_out_policy: SoldOutPolicy::Keep,
            log_filter: "info,vend=debug".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VEND_MACHINE_NAME`: Override machine name
    /// - `VEND_SOLD_OUT_POLICY`: `keep` or `remove`
    /// - `VEND_LOG`: Default log filter (e.g., "warn,vend=info")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(machine_name) = lookup("VEND_MACHINE_NAME") {
            config.machine_name = machine_name;
        }

        if let Some(policy) = lookup("VEND_SOLD_OUT_POLICY") {
            config.sold_out_policy = parse_policy(&policy)
                .ok_or_else(|| ConfigError::InvalidValue("VEND_SOLD_OUT_POLICY".to_string()))?;
        }

        if let Some(log_filter) = lookup("VEND_LOG") {
            if log_filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue("VEND_LOG".to_string()));
            }
            config.log_filter = log_filter;
        }

        Ok(config)
    }
}

fn parse_policy(raw: &str) -> Option<SoldOutPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "keep" => Some(SoldOutPolicy::Keep),
        "remove" => Some(SoldOutPolicy::Remove),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConfigState, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        assert_eq!(load(&[]).unwrap(), ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("VEND_MACHINE_NAME", "Lobby"),
            ("VEND_SOLD_OUT_POLICY", " Remove "),
            ("VEND_LOG", "warn"),
        ])
        .unwrap();

        assert_eq!(config.machine_name, "Lobby");
        assert_eq!(config.sold_out_policy, SoldOutPolicy::Remove);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_policy() {
        let err = load(&[("VEND_SOLD_OUT_POLICY", "discard")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for VEND_SOLD_OUT_POLICY");
    }

    #[test]
    fn test_empty_log_filter_rejected() {
        assert!(load(&[("VEND_LOG", "  ")]).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["soldOutPolicy"], "keep");
        assert_eq!(json["machineName"], "Vending Machine");
    }
}
