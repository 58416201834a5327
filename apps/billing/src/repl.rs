//! # Interactive Session
//!
//! A line-oriented stand-in for the billing form. Each line is parsed into
//! an [`Action`], run against the session, and every change to the cart is
//! followed by a freshly computed bill.
//!
//! ```text
//! > select 4          pick "Flex Printing 50inchx50inch - 200"
//! > qty 2             pending quantity
//! > add               add selection, quantity back to 1
//! > add 5             select 5 and add it
//! > dec 4             - button
//! > inc 4             + button
//! > print             write the print document
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

use raira_core::validation::parse_quantity;
use raira_core::CatalogId;

use crate::commands::print::{print_bill, PrintTarget, Printed};
use crate::commands::{bill, cart, catalog};
use crate::error::{AppError, AppResult};
use crate::state::{BillingSession, ConfigState};

const HELP: &str = "\
Commands:
  list                  show the catalog
  select <id>           select a catalog item
  qty <n>               set the quantity for the next add
  add [<id> [<n>]]      add the selected item (or <id>) to the bill
  inc <id>              one more of a bill line
  dec <id>              one less of a bill line (removes it at zero)
  bill                  show the bill
  json                  show the bill as JSON
  print [<path>|-]      write the print document (default: invoice folder)
  clear                 empty the bill
  help                  show this help
  quit                  leave
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Select(CatalogId),
    Quantity(i64),
    Add {
        id: Option<CatalogId>,
        quantity: Option<i64>,
    },
    Increment(CatalogId),
    Decrement(CatalogId),
    Bill,
    Json,
    Print(PrintTarget),
    Clear,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(AppError::validation("empty command"));
        };
        let args: Vec<&str> = words.collect();

        let action = match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("list" | "catalog", []) => Action::List,
            ("select", [id]) => Action::Select(id.parse()?),
            ("qty" | "quantity", [n]) => Action::Quantity(parse_quantity(n)?),
            ("add", []) => Action::Add {
                id: None,
                quantity: None,
            },
            ("add", [id]) => Action::Add {
                id: Some(id.parse()?),
                quantity: None,
            },
            ("add", [id, n]) => Action::Add {
                id: Some(id.parse()?),
                quantity: Some(parse_quantity(n)?),
            },
            ("inc" | "+", [id]) => Action::Increment(id.parse()?),
            ("dec" | "-", [id]) => Action::Decrement(id.parse()?),
            ("bill" | "show", []) => Action::Bill,
            ("json", []) => Action::Json,
            ("print", []) => Action::Print(PrintTarget::from_arg(None)),
            ("print", [path]) => Action::Print(PrintTarget::from_arg(Some(*path))),
            ("clear", []) => Action::Clear,
            ("help" | "?", []) => Action::Help,
            ("quit" | "exit" | "q", []) => Action::Quit,
            (other, _) => {
                return Err(AppError::validation(format!(
                    "unknown or malformed command '{}' (try 'help')",
                    other
                )))
            }
        };

        Ok(action)
    }
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one action and writes its output.
pub fn execute<W: Write>(
    action: Action,
    session: &mut BillingSession,
    config: &ConfigState,
    out: &mut W,
) -> AppResult<Flow> {
    debug!(?action, "execute");

    match action {
        Action::List => {
            writeln!(out, "{}", catalog::render_catalog(Some(session.selected().id)))?;
        }
        Action::Select(id) => {
            let item = cart::select_item(session, id)?;
            writeln!(out, "Selected: {} ({})", item.name, item.unit_price)?;
        }
        Action::Quantity(quantity) => {
            cart::set_quantity(session, quantity);
            writeln!(out, "Quantity: {}", quantity)?;
        }
        Action::Add { id, quantity } => {
            cart::add_item(session, id, quantity)?;
            write!(out, "{}", bill::show_bill(session))?;
        }
        Action::Increment(id) => {
            cart::increment(session, id)?;
            write!(out, "{}", bill::show_bill(session))?;
        }
        Action::Decrement(id) => {
            cart::decrement(session, id)?;
            write!(out, "{}", bill::show_bill(session))?;
        }
        Action::Bill => {
            write!(out, "{}", bill::show_bill(session))?;
        }
        Action::Json => {
            writeln!(out, "{}", bill::bill_json(session)?)?;
        }
        Action::Print(target) => match print_bill(session, config, &target, out)? {
            Printed::Stdout => writeln!(out)?,
            Printed::File(path) => writeln!(out, "Invoice written to {}", path.display())?,
        },
        Action::Clear => {
            cart::clear_cart(session);
            write!(out, "{}", bill::show_bill(session))?;
        }
        Action::Help => {
            write!(out, "{}", HELP)?;
        }
        Action::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Reads commands until `quit` or end of input.
///
/// Bad input is reported on `out` and the session carries on; only a
/// failure to read input or write output ends the loop with an error.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    session: &mut BillingSession,
    config: &ConfigState,
) -> AppResult<()> {
    info!("Interactive session started");
    writeln!(out, "RairaTech Billing Software")?;
    writeln!(out, "{}", catalog::render_catalog(Some(session.selected().id)))?;
    writeln!(out, "Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let flow = line
            .parse::<Action>()
            .and_then(|action| execute(action, session, config, out));

        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }

    info!(lines = session.cart().item_count(), "Interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn config() -> ConfigState {
        ConfigState {
            store_name: "RairaTech".to_string(),
            invoice_dir: PathBuf::from("unused"),
        }
    }

    fn run(script: &str) -> (BillingSession, String) {
        let mut session = BillingSession::new();
        let mut out = Vec::new();
        run_session(Cursor::new(script), &mut out, &mut session, &config()).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("list".parse::<Action>().unwrap(), Action::List);
        assert_eq!(
            "select 3".parse::<Action>().unwrap(),
            Action::Select(CatalogId::new(3))
        );
        assert_eq!("qty 0".parse::<Action>().unwrap(), Action::Quantity(0));
        assert_eq!(
            "ADD 4 2".parse::<Action>().unwrap(),
            Action::Add {
                id: Some(CatalogId::new(4)),
                quantity: Some(2)
            }
        );
        assert_eq!(
            "dec 2".parse::<Action>().unwrap(),
            Action::Decrement(CatalogId::new(2))
        );
        assert_eq!(
            "print -".parse::<Action>().unwrap(),
            Action::Print(PrintTarget::Stdout)
        );
        assert_eq!(
            "print".parse::<Action>().unwrap(),
            Action::Print(PrintTarget::InvoiceDir)
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<Action>().is_err());
        assert!("fly".parse::<Action>().is_err());
        assert!("select".parse::<Action>().is_err());
        assert!("select x".parse::<Action>().is_err());
        assert!("qty two".parse::<Action>().is_err());
        assert!("add 1 2 3".parse::<Action>().is_err());
    }

    #[test]
    fn test_session_adds_and_shows_bill() {
        let (session, output) = run("select 1\nqty 2\nadd\nquit\n");

        assert_eq!(session.pending_quantity(), 1);
        assert!(output.contains("Selected: Stamp Circular - 50 (₹50.00)"));
        assert!(output.contains("Subtotal:   ₹100.00"));
        assert!(output.contains("Total:      ₹110.00"));
    }

    #[test]
    fn test_session_recovers_from_errors() {
        let (session, output) = run("qty 0\nadd\nbogus\nqty 3\nadd 2\n");

        assert!(output.contains("error: quantity must be positive"));
        assert!(output.contains("error: unknown or malformed command 'bogus'"));
        assert_eq!(session.cart().line(CatalogId::new(2)).unwrap().quantity, 3);
    }

    #[test]
    fn test_session_decrement_removes_line() {
        let (session, output) = run("add 2\ndec 2\n");

        assert!(session.cart().is_empty());
        assert!(output.contains("Bill is empty."));
    }

    #[test]
    fn test_session_stops_at_quit() {
        let (session, _) = run("add 1\nquit\nadd 1\n");
        assert_eq!(session.cart().total_quantity(), 1);
    }

    #[test]
    fn test_session_prints_to_output() {
        let (_, output) = run("add 4\nadd 5\nprint -\n");
        assert!(output.contains("<title>Invoice</title>"));
        assert!(output.contains("<h3>Total: ₹605.00</h3>"));
    }

    #[test]
    fn test_session_json() {
        let (_, output) = run("add 1 2\njson\n");
        assert!(output.contains("\"subtotalPaise\": 10000"));
    }
}
