//! # Print Commands
//!
//! Exports the current bill as a standalone HTML print document.
//!
//! ## Print Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  print_bill(target)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Invoice::from_cart ──► render_print_document ──► write synchronously   │
//! │                                                        │                │
//! │                     ┌──────────────────────────────────┼─────────┐      │
//! │                     ▼                                  ▼         ▼      │
//! │                  stdout                         explicit path  invoice  │
//! │                                                                dir/     │
//! │                                                  INV-<date>-<id>.html   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The written file opens in any browser; its print style hides the
//! quantity controls.

use chrono::{Local, NaiveDateTime};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;

use raira_core::print::render_print_document;
use raira_core::PrintHeader;

use crate::error::AppResult;
use crate::state::{BillingSession, ConfigState};

/// Where the print document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintTarget {
    /// The writer passed to [`print_bill`] (stdout in practice)
    Stdout,
    /// A file at this exact path
    File(PathBuf),
    /// A generated file name inside the configured invoice directory
    InvoiceDir,
}

impl PrintTarget {
    /// Maps a user-supplied path: none → invoice dir, `-` → stdout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::trim) {
            None | Some("") => PrintTarget::InvoiceDir,
            Some("-") => PrintTarget::Stdout,
            Some(path) => PrintTarget::File(PathBuf::from(path)),
        }
    }
}

/// Where a print document ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Printed {
    Stdout,
    File(PathBuf),
}

/// Builds an invoice number like `INV-20261019-1a2b3c4d`.
pub fn invoice_number(issued_at: NaiveDateTime) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("INV-{}-{}", issued_at.format("%Y%m%d"), &suffix[..8])
}

/// Renders the current bill and writes it to `target`.
///
/// ## Arguments
/// * `stdout` - Writer used for [`PrintTarget::Stdout`]
///
/// ## Returns
/// The location the document was written to
pub fn print_bill<W: Write>(
    session: &BillingSession,
    config: &ConfigState,
    target: &PrintTarget,
    stdout: &mut W,
) -> AppResult<Printed> {
    debug!(?target, lines = session.cart().item_count(), "print_bill command");

    let issued_at = Local::now().naive_local();
    let header = PrintHeader {
        store_name: config.store_name.clone(),
        invoice_number: invoice_number(issued_at),
        issued_at,
    };
    let document = render_print_document(&session.invoice(), &header);

    let printed = match target {
        PrintTarget::Stdout => {
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
            Printed::Stdout
        }
        PrintTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &document)?;
            Printed::File(path.clone())
        }
        PrintTarget::InvoiceDir => {
            fs::create_dir_all(&config.invoice_dir)?;
            let path = config
                .invoice_dir
                .join(format!("{}.html", header.invoice_number));
            fs::write(&path, &document)?;
            Printed::File(path)
        }
    };

    info!(invoice = %header.invoice_number, ?printed, "invoice printed");
    Ok(printed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_item;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use raira_core::CatalogId;

    fn config_in(dir: &std::path::Path) -> ConfigState {
        ConfigState {
            store_name: "RairaTech".to_string(),
            invoice_dir: dir.join("invoices"),
        }
    }

    fn session_with_stamps() -> BillingSession {
        let mut session = BillingSession::new();
        add_item(&mut session, Some(CatalogId::new(1)), Some(2)).unwrap();
        session
    }

    #[test]
    fn test_target_from_arg() {
        assert_eq!(PrintTarget::from_arg(None), PrintTarget::InvoiceDir);
        assert_eq!(PrintTarget::from_arg(Some(" ")), PrintTarget::InvoiceDir);
        assert_eq!(PrintTarget::from_arg(Some("-")), PrintTarget::Stdout);
        assert_eq!(
            PrintTarget::from_arg(Some("bill.html")),
            PrintTarget::File(PathBuf::from("bill.html"))
        );
    }

    #[test]
    fn test_invoice_number_format() {
        let issued_at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let number = invoice_number(issued_at);

        assert!(number.starts_with("INV-20261019-"));
        assert_eq!(number.len(), "INV-20261019-".len() + 8);
        assert_ne!(number, invoice_number(issued_at));
    }

    #[test]
    fn test_print_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let printed = print_bill(
            &session_with_stamps(),
            &config_in(dir.path()),
            &PrintTarget::Stdout,
            &mut out,
        )
        .unwrap();

        assert_eq!(printed, Printed::Stdout);
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("<h2>RairaTech</h2>"));
        assert!(html.contains("<h3>Total: ₹110.00</h3>"));
    }

    #[test]
    fn test_print_to_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("bill.html");
        let mut out = Vec::new();

        let printed = print_bill(
            &session_with_stamps(),
            &config_in(dir.path()),
            &PrintTarget::File(path.clone()),
            &mut out,
        )
        .unwrap();

        assert_eq!(printed, Printed::File(path.clone()));
        assert!(out.is_empty());
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("<td>Stamp Circular - 50</td>"));
    }

    #[test]
    fn test_print_to_invoice_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let printed = print_bill(
            &session_with_stamps(),
            &config,
            &PrintTarget::InvoiceDir,
            &mut Vec::new(),
        )
        .unwrap();

        let Printed::File(path) = printed else {
            panic!("expected a file");
        };
        assert!(path.starts_with(&config.invoice_dir));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
        assert!(path.exists());
    }

    #[test]
    fn test_print_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let target = PrintTarget::File(dir.path().to_path_buf());

        let err = print_bill(
            &session_with_stamps(),
            &config_in(dir.path()),
            &target,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::PrintError);
    }
}
