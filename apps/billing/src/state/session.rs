//! # Billing Session
//!
//! The state behind the billing form: which item is selected, the quantity
//! typed so far, and the cart.
//!
//! ## Ownership
//! The session is owned by whoever drives it (the interactive loop or a
//! one-shot command) and is only ever touched through `&mut self`. There is
//! a single user and a single thread, so no locking is needed.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Changes                                │
//! │                                                                         │
//! │  User Action            Session Method          State Change            │
//! │  ───────────            ──────────────          ────────────            │
//! │                                                                         │
//! │  Pick item ────────────► select_item() ───────► selected = item        │
//! │                                                                         │
//! │  Type quantity ────────► set_quantity() ──────► pending_quantity = n   │
//! │                                                                         │
//! │  Add Item ─────────────► add_selected() ──────► cart.add_item(),       │
//! │                                                  pending_quantity = 1   │
//! │                                                                         │
//! │  + / - ────────────────► update_quantity() ───► cart line ± 1          │
//! │                                                                         │
//! │  View bill ────────────► invoice() ───────────► (read only, recomputed)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use raira_core::invoice;
use raira_core::{
    catalog, Cart, CartLine, CatalogId, CatalogItem, CoreResult, Invoice, Money, QuantityChange,
};

/// Pending quantity after a session starts and after every successful add.
pub const DEFAULT_QUANTITY: i64 = 1;

/// The controller-owned billing state.
#[derive(Debug, Clone)]
pub struct BillingSession {
    selected: &'static CatalogItem,
    pending_quantity: i64,
    cart: Cart,
}

impl BillingSession {
    /// Starts a session with the first catalog item selected, quantity 1 and
    /// an empty cart.
    pub fn new() -> Self {
        BillingSession {
            selected: catalog::default_item(),
            pending_quantity: DEFAULT_QUANTITY,
            cart: Cart::new(),
        }
    }

    /// Changes the selected item. Unknown ids leave the selection as is.
    pub fn select_item(&mut self, id: CatalogId) -> CoreResult<&'static CatalogItem> {
        self.selected = catalog::get(id)?;
        Ok(self.selected)
    }

    /// Stores the quantity as typed. Range checks happen on add.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.pending_quantity = quantity;
    }

    /// Adds the selected item with the pending quantity.
    ///
    /// On success the pending quantity goes back to 1. On failure nothing
    /// changes, so the user can correct the quantity and retry.
    pub fn add_selected(&mut self) -> CoreResult<()> {
        self.cart.add_item(self.selected, self.pending_quantity)?;
        self.pending_quantity = DEFAULT_QUANTITY;
        Ok(())
    }

    /// Adjusts a cart line by `delta`, dropping it below 1.
    pub fn update_quantity(&mut self, id: CatalogId, delta: i64) -> CoreResult<QuantityChange> {
        self.cart.update_quantity(id, delta)
    }

    /// Empties the cart. Selection and pending quantity are kept.
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    #[inline]
    pub fn selected(&self) -> &'static CatalogItem {
        self.selected
    }

    #[inline]
    pub fn pending_quantity(&self) -> i64 {
        self.pending_quantity
    }

    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Computes the bill for the current cart.
    pub fn invoice(&self) -> Invoice {
        Invoice::from_cart(&self.cart)
    }
}

impl Default for BillingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// One cart line as emitted by `--json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub id: CatalogId,
    pub name: String,
    pub unit_price_paise: Money,
    pub quantity: i64,
    pub line_total_paise: Money,
}

impl From<&CartLine> for BillItem {
    fn from(line: &CartLine) -> Self {
        BillItem {
            id: line.id,
            name: line.name.clone(),
            unit_price_paise: line.unit_price,
            quantity: line.quantity,
            line_total_paise: line.line_total(),
        }
    }
}

/// Cart totals summary for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_paise: Money,
    pub tax_paise: Money,
    pub total_paise: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let subtotal = invoice::subtotal(cart);
        let tax = invoice::tax(subtotal);
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_paise: subtotal,
            tax_paise: tax,
            total_paise: subtotal + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = BillingSession::new();
        assert_eq!(session.selected().id, CatalogId::new(1));
        assert_eq!(session.pending_quantity(), 1);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_selected_resets_quantity() {
        let mut session = BillingSession::new();
        session.select_item(CatalogId::new(3)).unwrap();
        session.set_quantity(4);
        session.add_selected().unwrap();

        assert_eq!(session.pending_quantity(), 1);
        let line = session.cart().line(CatalogId::new(3)).unwrap();
        assert_eq!(line.quantity, 4);
    }

    #[test]
    fn test_rejected_add_keeps_pending_quantity() {
        let mut session = BillingSession::new();
        session.set_quantity(0);

        assert!(session.add_selected().is_err());
        assert_eq!(session.pending_quantity(), 0);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_select_unknown_item_keeps_selection() {
        let mut session = BillingSession::new();
        session.select_item(CatalogId::new(2)).unwrap();

        assert!(session.select_item(CatalogId::new(77)).is_err());
        assert_eq!(session.selected().id, CatalogId::new(2));
    }

    #[test]
    fn test_decrement_last_unit_removes_line() {
        let mut session = BillingSession::new();
        session.select_item(CatalogId::new(2)).unwrap();
        session.add_selected().unwrap();

        let change = session.update_quantity(CatalogId::new(2), -1).unwrap();
        assert_eq!(change, QuantityChange::Removed);
        assert_eq!(session.invoice().subtotal, Money::zero());
    }

    #[test]
    fn test_cart_totals() {
        let mut session = BillingSession::new();
        session.select_item(CatalogId::new(4)).unwrap();
        session.add_selected().unwrap();
        session.select_item(CatalogId::new(5)).unwrap();
        session.add_selected().unwrap();

        let totals = CartTotals::from(session.cart());
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal_paise, Money::from_rupees(550));
        assert_eq!(totals.tax_paise, Money::from_rupees(55));
        assert_eq!(totals.total_paise, Money::from_rupees(605));
    }

    #[test]
    fn test_clear_keeps_selection() {
        let mut session = BillingSession::new();
        session.select_item(CatalogId::new(5)).unwrap();
        session.add_selected().unwrap();

        session.clear();
        assert!(session.cart().is_empty());
        assert_eq!(session.selected().id, CatalogId::new(5));
    }
}
