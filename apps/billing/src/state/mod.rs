//! # State Module
//!
//! Application state for the billing tool.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 run() / interactive loop                        │   │
//! │  │  let config = ConfigState::from_env().with_overrides(..);       │   │
//! │  │  let mut session = BillingSession::new();                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                 ┌────────────┴─────────────┐                           │
//! │                 ▼                          ▼                            │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │     BillingSession       │  │       ConfigState        │            │
//! │  │  selected item           │  │  store_name              │            │
//! │  │  pending quantity        │  │  invoice_dir             │            │
//! │  │  Cart                    │  │                          │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! │                                                                         │
//! │  • BillingSession: mutated through &mut by its single owner            │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigState, DEFAULT_STORE_NAME, ENV_INVOICE_DIR, ENV_STORE_NAME};
pub use session::{BillItem, BillingSession, CartTotals, DEFAULT_QUANTITY};
