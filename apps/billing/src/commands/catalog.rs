//! # Catalog Commands
//!
//! Lists the items a user can select.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use tracing::debug;

use raira_core::{catalog, CatalogId, CatalogItem};

/// Returns every catalog item in selector order.
pub fn list_catalog() -> &'static [CatalogItem] {
    debug!("list_catalog command");
    catalog::all()
}

/// Renders the catalog as a table, marking the selected item with `>`.
pub fn render_catalog(selected: Option<CatalogId>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["", "#", "Item", "Price (Rs)"]);

    for item in list_catalog() {
        let marker = if Some(item.id) == selected { ">" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            item.id.to_string(),
            item.name.to_string(),
            item.unit_price.to_string(),
        ]);
    }

    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.to_string()
}
