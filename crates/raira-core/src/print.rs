//! # Print Document Rendering
//!
//! Turns an [`Invoice`] into a standalone HTML document ready for a
//! browser or system print dialog.
//!
//! ## Document Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <title>Invoice</title>  + fixed inline print style                     │
//! │                                                                         │
//! │                          RairaTech            ◄── store heading         │
//! │               Invoice INV-20261019-1a2b3c4d   ◄── number + date         │
//! │                                                                         │
//! │  Bill                                         ◄── bill fragment         │
//! │  ┌──────────────────────┬──────────┬─────────────┐                      │
//! │  │ Item                 │ Quantity │ Price (Rs)  │                      │
//! │  ├──────────────────────┼──────────┼─────────────┤                      │
//! │  │ Stamp Circular - 50  │ [-] 2 [+]│ ₹100.00     │  [-]/[+] no-print    │
//! │  └──────────────────────┴──────────┴─────────────┘                      │
//! │  Subtotal: ₹100.00                                                      │
//! │  GST (10%): ₹10.00                                                      │
//! │  Total: ₹110.00                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is pure; writing the document somewhere is the caller's job.

use chrono::NaiveDateTime;
use std::fmt::{self, Write};

use crate::invoice::Invoice;

/// CSS class for elements that must not appear on paper.
pub const NO_PRINT_CLASS: &str = "no-print";

const PRINT_STYLE: &str = r#"
      body {
        font-family: Arial, sans-serif;
        padding: 20px;
        text-align: center;
      }
      table {
        width: 100%;
        border-collapse: collapse;
        margin-top: 20px;
      }
      th, td {
        border: 1px solid #000;
        padding: 8px;
        text-align: left;
      }
      .no-print {
        display: none;
      }
      h2 {
        font-size: 24px;
        margin-bottom: 20px;
        color: #2c3e50;
      }
"#;

/// Identifies the printed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintHeader {
    /// Heading at the top of the page
    pub store_name: String,

    /// Invoice reference, e.g. `INV-20261019-1a2b3c4d`
    pub invoice_number: String,

    /// When the document was produced (local time)
    pub issued_at: NaiveDateTime,
}

/// Escapes text for use inside HTML element content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the bill markup: heading, item table and totals.
///
/// Quantity controls are kept but tagged [`NO_PRINT_CLASS`] so the print
/// style hides them.
pub fn render_bill_fragment(invoice: &Invoice) -> String {
    let mut html = String::new();
    let _ = write_bill_fragment(&mut html, invoice);
    html
}

fn write_bill_fragment(html: &mut String, invoice: &Invoice) -> fmt::Result {
    writeln!(html, r#"<div id="bill">"#)?;
    writeln!(html, "  <h2>Bill</h2>")?;
    writeln!(html, "  <table>")?;
    writeln!(html, "    <thead>")?;
    writeln!(html, "      <tr><th>Item</th><th>Quantity</th><th>Price (Rs)</th></tr>")?;
    writeln!(html, "    </thead>")?;
    writeln!(html, "    <tbody>")?;
    for line in &invoice.lines {
        writeln!(
            html,
            "      <tr data-id=\"{id}\"><td>{name}</td><td>\
             <button class=\"{np}\">-</button> <span>{qty}</span> \
             <button class=\"{np}\">+</button></td><td>{price}</td></tr>",
            id = line.id,
            name = escape_html(&line.name),
            np = NO_PRINT_CLASS,
            qty = line.quantity,
            price = escape_html(&line.line_total.to_string()),
        )?;
    }
    writeln!(html, "    </tbody>")?;
    writeln!(html, "  </table>")?;
    writeln!(html, "  <div class=\"totals\">")?;
    writeln!(html, "    <h3>Subtotal: {}</h3>", invoice.subtotal)?;
    writeln!(html, "    <h3>GST ({}): {}</h3>", invoice.tax_rate, invoice.tax)?;
    writeln!(html, "    <h3>Total: {}</h3>", invoice.total)?;
    writeln!(html, "  </div>")?;
    writeln!(html, "  <button class=\"{}\">Print Bill</button>", NO_PRINT_CLASS)?;
    writeln!(html, "</div>")?;

    Ok(())
}

/// Renders the complete standalone print document.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use raira_core::print::{render_print_document, PrintHeader};
/// use raira_core::{Cart, Invoice};
///
/// let header = PrintHeader {
///     store_name: "RairaTech".to_string(),
///     invoice_number: "INV-1".to_string(),
///     issued_at: NaiveDate::from_ymd_opt(2026, 10, 19)
///         .unwrap()
///         .and_hms_opt(9, 30, 0)
///         .unwrap(),
/// };
/// let html = render_print_document(&Invoice::from_cart(&Cart::new()), &header);
///
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<title>Invoice</title>"));
/// assert!(html.contains("<h2>RairaTech</h2>"));
/// ```
pub fn render_print_document(invoice: &Invoice, header: &PrintHeader) -> String {
    let mut html = String::new();
    let _ = write_print_document(&mut html, invoice, header);
    html
}

fn write_print_document(
    html: &mut String,
    invoice: &Invoice,
    header: &PrintHeader,
) -> fmt::Result {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html>")?;
    writeln!(html, "  <head>")?;
    writeln!(html, "    <meta charset=\"utf-8\">")?;
    writeln!(html, "    <title>Invoice</title>")?;
    writeln!(html, "    <style>{}    </style>", PRINT_STYLE)?;
    writeln!(html, "  </head>")?;
    writeln!(html, "  <body>")?;
    writeln!(html, "    <h2>{}</h2>", escape_html(&header.store_name))?;
    writeln!(
        html,
        "    <p class=\"invoice-meta\">Invoice {} &middot; {}</p>",
        escape_html(&header.invoice_number),
        header.issued_at.format("%d-%m-%Y %H:%M")
    )?;
    write_bill_fragment(html, invoice)?;
    writeln!(html, "  </body>")?;
    writeln!(html, "</html>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, Cart, CatalogId};
    use chrono::NaiveDate;

    fn header(store_name: &str) -> PrintHeader {
        PrintHeader {
            store_name: store_name.to_string(),
            invoice_number: "INV-20261019-00000001".to_string(),
            issued_at: NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(14, 5, 0)
                .unwrap(),
        }
    }

    fn sample_invoice() -> Invoice {
        let mut cart = Cart::new();
        cart.add_item(catalog::get(CatalogId::new(1)).unwrap(), 2)
            .unwrap();
        cart.add_item(catalog::get(CatalogId::new(5)).unwrap(), 1)
            .unwrap();
        Invoice::from_cart(&cart)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html(r#""x" 'y'"#), "&quot;x&quot; &#39;y&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_fragment_lists_lines_and_totals() {
        let html = render_bill_fragment(&sample_invoice());

        assert!(html.contains("<th>Item</th><th>Quantity</th><th>Price (Rs)</th>"));
        assert!(html.contains("<td>Stamp Circular - 50</td>"));
        assert!(html.contains("<span>2</span>"));
        assert!(html.contains("<td>₹100.00</td>"));
        assert!(html.contains("<td>₹350.00</td>"));
        assert!(html.contains("<h3>Subtotal: ₹450.00</h3>"));
        assert!(html.contains("<h3>GST (10%): ₹45.00</h3>"));
        assert!(html.contains("<h3>Total: ₹495.00</h3>"));
    }

    #[test]
    fn test_fragment_marks_controls_no_print() {
        let html = render_bill_fragment(&sample_invoice());
        assert!(html.contains(r#"<button class="no-print">-</button>"#));
        assert!(html.contains(r#"<button class="no-print">+</button>"#));
        assert!(html.contains(r#"<button class="no-print">Print Bill</button>"#));
    }

    #[test]
    fn test_document_has_print_style_and_header() {
        let html = render_print_document(&sample_invoice(), &header("RairaTech"));

        assert!(html.contains("<title>Invoice</title>"));
        assert!(html.contains(".no-print {\n        display: none;"));
        assert!(html.contains("<h2>RairaTech</h2>"));
        assert!(html.contains("Invoice INV-20261019-00000001 &middot; 19-10-2026 14:05"));
        assert!(html.contains(r#"<div id="bill">"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_document_escapes_store_name() {
        let html = render_print_document(&sample_invoice(), &header("<Raira & Sons>"));
        assert!(html.contains("<h2>&lt;Raira &amp; Sons&gt;</h2>"));
    }

    #[test]
    fn test_empty_invoice_renders_zero_totals() {
        let html = render_bill_fragment(&Invoice::from_cart(&Cart::new()));
        assert!(html.contains("<tbody>\n    </tbody>"));
        assert!(html.contains("<h3>Total: ₹0.00</h3>"));
    }
}
