//! # RairaTech Billing Library
//!
//! Everything behind the `raira-billing` binary. `main.rs` only parses the
//! command line and hands over to [`run`].
//!
//! ## Module Organization
//! ```text
//! raira_billing_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── repl.rs         ◄─── Interactive session loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Selection, pending quantity, cart
//! │   └── config.rs   ◄─── Store name, invoice folder
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Catalog listing
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── bill.rs     ◄─── Bill table / JSON
//! │   └── print.rs    ◄─── Print document export
//! └── error.rs        ◄─── Error type for commands
//! ```
//!
//! ## Run Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raira-billing [interactive]   read commands from stdin until quit     │
//! │  raira-billing catalog         print the catalog table                  │
//! │  raira-billing bill -i 1:2     build a bill, show it, optionally print  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod repl;
pub mod state;

use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{BillArgs, Cli, Command, LogLevelArg};
use commands::print::{print_bill, PrintTarget, Printed};
use commands::{bill, cart, catalog};
use error::{AppError, AppResult};
use state::{BillingSession, ConfigState};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn,raira=info";

/// Runs the billing application and returns the process exit code.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • --log-level beats RUST_LOG beats the default                      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • RAIRA_STORE_NAME / RAIRA_INVOICE_DIR                              │
/// │     • --store-name / --invoice-dir override the environment             │
/// │                                                                         │
/// │  3. Dispatch ─────────────────────────────────────────────────────────► │
/// │     • catalog / bill / interactive                                      │
/// │     • errors go to stderr, exit code 1                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> ExitCode {
    if let Err(e) = init_tracing(cli.log_level) {
        eprintln!("error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let config = ConfigState::from_env().with_overrides(cli.store_name, cli.invoice_dir);
    info!(
        store = %config.store_name,
        invoice_dir = %config.invoice_dir.display(),
        "Starting RairaTech Billing"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Some(Command::Catalog) => {
            writeln!(out, "{}", catalog::render_catalog(None)).map_err(AppError::from)
        }
        Some(Command::Bill(args)) => run_bill(&args, &config, &mut out),
        Some(Command::Interactive) | None => {
            let stdin = io::stdin();
            let mut session = BillingSession::new();
            repl::run_session(stdin.lock(), &mut out, &mut session, &config)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// One-shot bill: add every `--item`, then show and optionally print.
///
/// With `--json`, a failure is also written to `out` as an error object so
/// scripts reading stdout always get JSON.
///
/// With `--print -` the print document is the only thing written to `out`.
pub fn run_bill<W: Write>(args: &BillArgs, config: &ConfigState, out: &mut W) -> AppResult<()> {
    let result = build_and_show(args, config, out);

    if args.json {
        if let Err(e) = &result {
            writeln!(out, "{}", serde_json::to_string_pretty(e)?)?;
        }
    }

    result
}

fn build_and_show<W: Write>(args: &BillArgs, config: &ConfigState, out: &mut W) -> AppResult<()> {
    let mut session = BillingSession::new();
    for item in &args.items {
        debug!(item = %item.id, quantity = item.quantity, "adding item from command line");
        cart::add_item(&mut session, Some(item.id), Some(item.quantity))?;
    }

    let target = args.print.as_deref().map(|path| PrintTarget::from_arg(Some(path)));

    if target != Some(PrintTarget::Stdout) {
        if args.json {
            writeln!(out, "{}", bill::bill_json(&session)?)?;
        } else {
            write!(out, "{}", bill::show_bill(&session))?;
        }
    }

    if let Some(target) = target {
        if let Printed::File(path) = print_bill(&session, config, &target, out)? {
            if !args.json {
                writeln!(out, "Invoice written to {}", path.display())?;
            }
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log-level debug` - Show debug messages for everything
/// - `RUST_LOG=raira=trace` - Show trace for raira crates only
/// - Default: WARN, INFO for raira crates
fn init_tracing(level: Option<LogLevelArg>) -> AppResult<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(log_filter(level, env.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| AppError::internal(e.to_string()))
}

/// Picks the filter directives: `--log-level`, then `RUST_LOG`, then the
/// default. A blank `RUST_LOG` counts as unset.
pub fn log_filter(level: Option<LogLevelArg>, env: Option<&str>) -> String {
    match (level, env.map(str::trim)) {
        (Some(level), _) => level.as_directive().to_string(),
        (None, Some(env)) if !env.is_empty() => env.to_string(),
        (None, _) => DEFAULT_LOG_FILTER.to_string(),
    }
}
