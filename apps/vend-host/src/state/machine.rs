//! # Machine State
//!
//! The single vending machine shared by every command.
//!
//! ## Thread Safety
//! The ledger and the coffer live inside one `VendingMachine`, behind one
//! mutex. A purchase touches both, so it holds the lock for the whole
//! operation and no other command can observe it half-applied.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request A: buy_product ──► lock ─► get, check, dispense, decrement ─►  │
//! │                                                              unlock     │
//! │  request B: buy_product ─────────── waits ──────────────────► lock ─►   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use vend_core::{SoldOutPolicy, VendingMachine};

/// Shared handle to the machine.
///
/// Cloning the handle shares the same machine.
///
/// ## Why Not RwLock?
/// Most commands mutate, and every one of them finishes in a handful of
/// steps over six denominations and a few slots.
#[derive(Debug, Clone, Default)]
pub struct MachineState {
    machine: Arc<Mutex<VendingMachine>>,
}

impl MachineState {
    /// Creates an empty machine with the given sold-out policy.
    pub fn new(policy: SoldOutPolicy) -> Self {
        MachineState {
            machine: Arc::new(Mutex::new(VendingMachine::new(policy))),
        }
    }

    /// Executes a function with read access to the machine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = machine_state.with_machine(|m| m.coffer().total_value());
    /// ```
    pub fn with_machine<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&VendingMachine) -> R,
    {
        let machine = self.machine.lock().expect("Machine mutex poisoned");
        f(&machine)
    }

    /// Executes a function with write access to the machine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// machine_state.with_machine_mut(|m| m.buy(&payload, "crisps"))?;
    /// ```
    pub fn with_machine_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut VendingMachine) -> R,
    {
        let mut machine = self.machine.lock().expect("Machine mutex poisoned");
        f(&mut machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vend_core::Coin;

    #[test]
    fn test_clones_share_the_machine() {
        let state = MachineState::default();
        let other = state.clone();

        other
            .with_machine_mut(|m| m.coffer_mut().increment(Coin::Dime, 3))
            .unwrap();

        assert_eq!(state.with_machine(|m| m.coffer().total_value_cents()), 30);
    }

    #[test]
    fn test_new_uses_policy() {
        let state = MachineState::new(SoldOutPolicy::Remove);
        assert_eq!(
            state.with_machine(|m| m.ledger().policy()),
            SoldOutPolicy::Remove
        );
    }
}
