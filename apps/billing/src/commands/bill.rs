//! # Bill Commands
//!
//! Shows the current bill. The invoice is rebuilt from the cart on every
//! call.
//!
//! ```text
//! ╭──────────────────────┬──────────┬────────────╮
//! │ Item                 ┆ Quantity ┆ Price (Rs) │
//! ╞══════════════════════╪══════════╪════════════╡
//! │ Stamp Circular - 50  ┆ 2        ┆    ₹100.00 │
//! ╰──────────────────────┴──────────┴────────────╯
//! Subtotal:   ₹100.00
//! GST (10%):  ₹10.00
//! Total:      ₹110.00
//! ```

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use std::fmt::Write;
use tracing::debug;

use raira_core::Invoice;

use crate::commands::cart::get_cart;
use crate::error::AppResult;
use crate::state::BillingSession;

/// Renders an invoice for the terminal.
pub fn render_bill(invoice: &Invoice) -> String {
    let mut output = String::new();

    if invoice.is_empty() {
        output.push_str("Bill is empty.\n");
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec!["#", "Item", "Quantity", "Price (Rs)"]);

        for line in &invoice.lines {
            table.add_row(vec![
                line.id.to_string(),
                line.name.clone(),
                line.quantity.to_string(),
                line.line_total.to_string(),
            ]);
        }

        for index in [2, 3] {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        let _ = writeln!(output, "{table}");
    }

    let gst_label = format!("GST ({}):", invoice.tax_rate);
    let _ = writeln!(output, "{:<12}{}", "Subtotal:", invoice.subtotal);
    let _ = writeln!(output, "{:<12}{}", gst_label, invoice.tax);
    let _ = writeln!(output, "{:<12}{}", "Total:", invoice.total);

    output
}

/// Shows the session's current bill.
pub fn show_bill(session: &BillingSession) -> String {
    debug!(lines = session.cart().item_count(), "show_bill command");
    render_bill(&session.invoice())
}

/// The current cart as pretty-printed JSON.
pub fn bill_json(session: &BillingSession) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&get_cart(session))?)
}
