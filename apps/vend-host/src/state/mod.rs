//! # State Module
//!
//! Host-owned state: the one machine instance and the configuration it was
//! built from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐      ┌──────────────────────────┐     │
//! │  │        MachineState          │      │       ConfigState        │     │
//! │  │                              │      │                          │     │
//! │  │  Arc<Mutex<VendingMachine>>  │      │  machine_name            │     │
//! │  │  (ledger + coffer, locked    │      │  sold_out_policy         │     │
//! │  │   together)                  │      │  log_filter              │     │
//! │  └──────────────────────────────┘      └──────────────────────────┘     │
//! │                                                                         │
//! │  Read-only after startup ──────────────────────────────► ConfigState    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod machine;

pub use config::{ConfigError, ConfigState};
pub use machine::MachineState;
