//! Command line definitions for the billing binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use raira_core::validation::parse_quantity;
use raira_core::CatalogId;

#[derive(Debug, Parser)]
#[command(
    name = "raira-billing",
    version,
    about = "RairaTech Billing - build a bill and print an invoice",
    long_about = "Select catalog items and quantities, review the bill with 10% GST,\n\
                  and export a print-ready HTML invoice.\n\n\
                  Runs an interactive session when no command is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log level (overrides RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Store name printed at the top of invoices.
    #[arg(long = "store-name", value_name = "NAME", global = true)]
    pub store_name: Option<String>,

    /// Folder for invoices printed without an explicit path.
    #[arg(long = "invoice-dir", value_name = "DIR", global = true)]
    pub invoice_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalog.
    Catalog,

    /// Build a bill from the command line and show or print it.
    Bill(BillArgs),

    /// Start an interactive billing session (default).
    Interactive,
}

#[derive(Debug, Args)]
pub struct BillArgs {
    /// Item to add, as ID or ID:QTY (repeatable; same ID accumulates).
    #[arg(
        long = "item",
        short = 'i',
        value_name = "ID[:QTY]",
        required = true,
        value_parser = parse_item_arg
    )]
    pub items: Vec<ItemArg>,

    /// Print the bill as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Write the print document to PATH ("-" for stdout, no value for the
    /// invoice folder).
    #[arg(
        long = "print",
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub print: Option<String>,
}

/// One `--item` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemArg {
    pub id: CatalogId,
    pub quantity: i64,
}

/// Parses `ID` or `ID:QTY`. Quantity range is checked when the item is added.
pub fn parse_item_arg(value: &str) -> Result<ItemArg, String> {
    let (id, quantity) = match value.split_once(':') {
        Some((id, quantity)) => (id, parse_quantity(quantity).map_err(|e| e.to_string())?),
        None => (value, 1),
    };

    let id = id.parse::<CatalogId>().map_err(|e| e.to_string())?;
    Ok(ItemArg { id, quantity })
}

/// CLI log level choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevelArg::Error => "error",
            LogLevelArg::Warn => "warn",
            LogLevelArg::Info => "info",
            LogLevelArg::Debug => "debug",
            LogLevelArg::Trace => "trace",
        }
    }
}
