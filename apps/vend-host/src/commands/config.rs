//! # Config Commands
//!
//! Read-only access to the host configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
