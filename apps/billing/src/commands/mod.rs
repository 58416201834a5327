//! # Commands Module
//!
//! Every action the counter can take, independent of how it was typed.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Item listing
//! ├── cart.rs     ◄─── Selection, quantity, add, + / -, clear
//! ├── bill.rs     ◄─── Bill as a terminal table or JSON
//! └── print.rs    ◄─── Print document export
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "add 4 2"  (interactive)      --item 4:2  (one-shot)                   │
//! │         │                              │                                │
//! │         └──────────────┬───────────────┘                                │
//! │                        ▼                                                │
//! │  fn add_item(session: &mut BillingSession, ..) -> AppResult<()>         │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  bill::render_bill(&session.invoice())  ◄── recomputed every time       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands receive exactly the state they need: cart commands take the
//! session, print takes the session and the config.

pub mod bill;
pub mod cart;
pub mod catalog;
pub mod print;
