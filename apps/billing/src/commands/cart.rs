//! # Cart Commands
//!
//! Commands that drive the billing session.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Printed  │                        │
//! │  │  Cart    │     │          │     │ (cart    │                        │
//! │  └──────────┘     └──────────┘     │  kept)   │                        │
//! │       ▲                │           └──────────┘                        │
//! │       │           select_item                                           │
//! │       │           set_quantity                                          │
//! │       │           add_item                                              │
//! │       │           increment / decrement                                 │
//! │       │                │                                                │
//! │       └──── clear_cart ┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use raira_core::{CatalogId, CatalogItem, QuantityChange};

use crate::error::AppResult;
use crate::state::{BillItem, BillingSession, CartTotals};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<BillItem>,
    pub totals: CartTotals,
}

impl From<&BillingSession> for CartResponse {
    fn from(session: &BillingSession) -> Self {
        CartResponse {
            items: session.cart().lines().iter().map(BillItem::from).collect(),
            totals: CartTotals::from(session.cart()),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(session: &BillingSession) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(session)
}

/// Changes the selected catalog item.
pub fn select_item(
    session: &mut BillingSession,
    id: CatalogId,
) -> AppResult<&'static CatalogItem> {
    debug!(item = %id, "select_item command");
    let item = session
        .select_item(id)
        .inspect_err(|e| warn!("select rejected: {}", e))?;
    Ok(item)
}

/// Stores the pending quantity for the next add.
pub fn set_quantity(session: &mut BillingSession, quantity: i64) {
    debug!(quantity, "set_quantity command");
    session.set_quantity(quantity);
}

/// Adds the selected item to the cart.
///
/// ## Behavior
/// - `id` given: selects that item first
/// - `quantity` given: replaces the pending quantity first
/// - then adds the selection with the pending quantity, which resets to 1
///
/// ## Arguments
/// * `id` - Optional catalog id to select before adding
/// * `quantity` - Optional quantity to use instead of the pending one
///
/// Callers read the updated cart back from the session.
pub fn add_item(
    session: &mut BillingSession,
    id: Option<CatalogId>,
    quantity: Option<i64>,
) -> AppResult<()> {
    if let Some(id) = id {
        select_item(session, id)?;
    }
    if let Some(quantity) = quantity {
        set_quantity(session, quantity);
    }

    debug!(
        item = %session.selected().id,
        quantity = session.pending_quantity(),
        "add_item command"
    );

    session
        .add_selected()
        .inspect_err(|e| warn!("add rejected: {}", e))?;

    Ok(())
}

/// Increases a cart line by one.
pub fn increment(session: &mut BillingSession, id: CatalogId) -> AppResult<QuantityChange> {
    change_quantity(session, id, 1)
}

/// Decreases a cart line by one, removing it when it reaches zero.
pub fn decrement(session: &mut BillingSession, id: CatalogId) -> AppResult<QuantityChange> {
    change_quantity(session, id, -1)
}

fn change_quantity(
    session: &mut BillingSession,
    id: CatalogId,
    delta: i64,
) -> AppResult<QuantityChange> {
    debug!(item = %id, delta, "update_quantity command");

    let change = session.update_quantity(id, delta)?;
    match change {
        QuantityChange::Removed => debug!(item = %id, "line removed"),
        QuantityChange::Updated(quantity) => debug!(item = %id, quantity, "line updated"),
    }

    Ok(change)
}

/// Clears all lines from the cart.
pub fn clear_cart(session: &mut BillingSession) {
    debug!("clear_cart command");
    session.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use raira_core::Money;

    #[test]
    fn test_add_item_with_explicit_id_and_quantity() {
        let mut session = BillingSession::new();
        add_item(&mut session, Some(CatalogId::new(1)), Some(2)).unwrap();
        let response = get_cart(&session);

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.subtotal_paise, Money::from_rupees(100));
        assert_eq!(response.totals.tax_paise, Money::from_rupees(10));
        assert_eq!(response.totals.total_paise, Money::from_rupees(110));
        assert_eq!(session.pending_quantity(), 1);
    }

    #[test]
    fn test_add_item_uses_pending_state() {
        let mut session = BillingSession::new();
        select_item(&mut session, CatalogId::new(1)).unwrap();
        set_quantity(&mut session, 2);
        add_item(&mut session, None, None).unwrap();
        set_quantity(&mut session, 3);
        add_item(&mut session, None, None).unwrap();
        let response = get_cart(&session);

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 5);
        assert_eq!(response.totals.subtotal_paise, Money::from_rupees(250));
    }

    #[test]
    fn test_add_item_rejects_zero_quantity() {
        let mut session = BillingSession::new();
        let err = add_item(&mut session, None, Some(0)).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_item() {
        let mut session = BillingSession::new();
        let err = add_item(&mut session, Some(CatalogId::new(99)), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut session = BillingSession::new();
        add_item(&mut session, Some(CatalogId::new(2)), Some(1)).unwrap();

        let change = increment(&mut session, CatalogId::new(2)).unwrap();
        assert_eq!(change, QuantityChange::Updated(2));

        decrement(&mut session, CatalogId::new(2)).unwrap();
        let change = decrement(&mut session, CatalogId::new(2)).unwrap();
        assert_eq!(change, QuantityChange::Removed);

        let response = get_cart(&session);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.subtotal_paise, Money::zero());
    }

    #[test]
    fn test_decrement_missing_line() {
        let mut session = BillingSession::new();
        let err = decrement(&mut session, CatalogId::new(3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_clear_cart() {
        let mut session = BillingSession::new();
        add_item(&mut session, Some(CatalogId::new(4)), None).unwrap();
        clear_cart(&mut session);

        let response = get_cart(&session);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.item_count, 0);
    }

    #[test]
    fn test_cart_response_json_shape() {
        let mut session = BillingSession::new();
        add_item(&mut session, Some(CatalogId::new(4)), Some(1)).unwrap();
        add_item(&mut session, Some(CatalogId::new(5)), Some(1)).unwrap();

        let json = serde_json::to_value(get_cart(&session)).unwrap();
        assert_eq!(json["items"][0]["id"], 4);
        assert_eq!(json["items"][1]["unitPricePaise"], 35_000);
        assert_eq!(json["totals"]["subtotalPaise"], 55_000);
        assert_eq!(json["totals"]["taxPaise"], 5_500);
        assert_eq!(json["totals"]["totalPaise"], 60_500);
    }
}
