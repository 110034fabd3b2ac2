//! # Host Commands Module
//!
//! Every operation the HTTP adapter can call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Product listing, CRUD, quantity and price
//! ├── purchase.rs ◄─── buy_product
//! ├── coin.rs     ◄─── Coffer inspection, loading, unloading
//! ├── machine.rs  ◄─── Whole-machine reset
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  HTTP adapter                                                           │
//! │  ────────────                                                           │
//! │  POST /products/crisps/buy  { "Dollar": 3 }                             │
//! │         │                                                               │
//! │         │ (deserialized by the adapter)                                 │
//! │         ▼                                                               │
//! │  vend-host                                                              │
//! │  ─────────                                                              │
//! │  fn buy_product(                                                        │
//! │      machine: &MachineState,  ◄── Owned by the adapter                 │
//! │      request: BuyRequest,     ◄── From the request body                │
//! │  ) -> Result<OrderResponse, ApiError>                                   │
//! │         │                                                               │
//! │         │ (serialized by the adapter)                                   │
//! │         ▼                                                               │
//! │  200 { name, description, price, change }                               │
//! │  or err.http_status() { code, message }                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Public commands: `list_products`, `get_product`, `buy_product`.
//! Everything else is administrative; the adapter authenticates callers
//! before dispatching to it.

pub mod coin;
pub mod config;
pub mod machine;
pub mod product;
pub mod purchase;
