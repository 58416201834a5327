//! # RairaTech Billing Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RairaTech Billing                                │
//! │                                                                         │
//! │  main.rs ────► parses the command line                                  │
//! │                                                                         │
//! │  lib.rs ─────► logging, configuration, dispatch                         │
//! │                                                                         │
//! │  repl.rs / commands/ ──► select, add, + / -, bill, print                │
//! │                                                                         │
//! │  raira-core ─► catalog, cart, invoice totals, print document            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::process::ExitCode;

use raira_billing_lib::cli::Cli;

fn main() -> ExitCode {
    raira_billing_lib::run(Cli::parse())
}
