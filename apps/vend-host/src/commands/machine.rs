//! # Machine Commands
//!
//! Whole-machine operations for operators and test harnesses.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::MachineState;

/// Removes every product and empties the coffer.
///
/// The sold-out policy chosen at startup is kept.
pub fn reset_machine(machine: &MachineState) -> Result<(), ApiError> {
    debug!("reset_machine command");
    machine.with_machine_mut(|m| m.reset());
    warn!("Machine reset: all products and coins cleared");
    Ok(())
}
