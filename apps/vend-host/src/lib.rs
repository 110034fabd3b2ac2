//! # Vend Host Library
//!
//! In-process host for the vending machine. An HTTP adapter (routes,
//! authentication, response envelopes) links this library and calls the
//! functions in [`commands`]; nothing here speaks a wire protocol itself.
//!
//! ## Module Organization
//! ```text
//! vend_host/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── machine.rs  ◄─── Shared machine behind a mutex
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product listing & admin commands
//! │   ├── purchase.rs ◄─── The buy command
//! │   ├── coin.rs     ◄─── Coffer inspection & loading
//! │   ├── machine.rs  ◄─── Whole-machine reset
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_host::commands::product::list_products;
//! use vend_host::state::ConfigState;
//!
//! let config = ConfigState::default();
//! let machine = vend_host::init(&config);
//! assert!(list_products(&machine).unwrap().is_empty());
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, MachineState};

/// Starts the host: installs logging and builds the machine.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Host Startup                                      │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • RUST_LOG wins, otherwise the configured filter                    │
/// │                                                                         │
/// │  2. Build the Machine ────────────────────────────────────────────────► │
/// │     • Empty ledger with the configured sold-out policy                  │
/// │     • Empty coffer                                                      │
/// │     • Wrapped in Arc<Mutex> and handed to the adapter                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn init(config: &ConfigState) -> MachineState {
    init_tracing(config);

    info!(
        machine_name = %config.machine_name,
        sold_out_policy = ?config.sold_out_policy,
        "Starting vending machine host"
    );

    MachineState::new(config.sold_out_policy)
}

/// Installs the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vend=trace` - Show trace for vend crates only
/// - Default: `config.log_filter`
///
/// Returns `false` if a global subscriber was already installed (tests, or
/// an adapter that configures its own).
pub fn init_tracing(config: &ConfigState) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
