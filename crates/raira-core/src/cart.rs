//! # Cart
//!
//! The accumulated bill: an ordered list of lines, one per catalog item.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions                                     │
//! │                                                                         │
//! │  User Action              Transition               Cart Change          │
//! │  ───────────              ──────────               ───────────          │
//! │                                                                         │
//! │  Add Item ───────────────► add_item() ───────────► push or qty += n    │
//! │                                                                         │
//! │  + / - ──────────────────► update_quantity() ────► qty += delta,       │
//! │                                                     drop line if < 1    │
//! │                                                                         │
//! │  Clear ──────────────────► clear() ──────────────► lines.clear()       │
//! │                                                                         │
//! │  NOTE: Every transition validates first and only then mutates, so a     │
//! │        failed call leaves the cart exactly as it was.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::invoice::GST_RATE;
use crate::money::Money;
use crate::types::{CatalogId, CatalogItem};
use crate::validation::validate_quantity;

/// One catalog item's entry in the cart.
///
/// Name and price are copied from the catalog when the line is created, so
/// the line renders the same way for as long as it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog id (unique within the cart)
    pub id: CatalogId,

    /// Item name at time of adding
    pub name: String,

    /// Unit price at time of adding
    pub unit_price: Money,

    /// Quantity in cart, always >= 1
    pub quantity: i64,
}

impl CartLine {
    /// Creates a new line from a catalog item and quantity.
    pub fn from_item(item: &CatalogItem, quantity: i64) -> Self {
        CartLine {
            id: item.id,
            name: item.name.to_string(),
            unit_price: item.unit_price,
            quantity,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// What [`Cart::update_quantity`] did to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line stays, with this new quantity.
    Updated(i64),
    /// The quantity would have dropped below 1, so the line was removed.
    Removed,
}

/// The cart.
///
/// ## Invariants
/// - Lines are unique by `id` (adding the same item increases quantity)
/// - Every quantity is >= 1
/// - Lines keep first-added order
/// - Total quantity, subtotal and subtotal plus GST all fit in an `i64`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds an item to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - `quantity` must pass [`validate_quantity`] (1..=999)
    /// - Item already in cart: its quantity grows by `quantity`, position kept
    /// - Item not in cart: appended as a new line
    ///
    /// ## Example
    /// ```rust
    /// use raira_core::{catalog, Cart, CatalogId};
    ///
    /// let stamp = catalog::get(CatalogId::new(1)).unwrap();
    /// let mut cart = Cart::new();
    /// cart.add_item(stamp, 2).unwrap();
    /// cart.add_item(stamp, 3).unwrap();
    ///
    /// assert_eq!(cart.lines().len(), 1);
    /// assert_eq!(cart.lines()[0].quantity, 5);
    /// assert!(cart.add_item(stamp, 0).is_err());
    /// ```
    pub fn add_item(&mut self, item: &CatalogItem, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        match self.lines.iter().position(|l| l.id == item.id) {
            Some(index) => {
                let new_quantity = self.lines[index]
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CoreError::QuantityOverflow { id: item.id })?;
                self.check_fits(item.id, item.unit_price, new_quantity)?;
                self.lines[index].quantity = new_quantity;
            }
            None => {
                self.check_fits(item.id, item.unit_price, quantity)?;
                self.lines.push(CartLine::from_item(item, quantity));
            }
        }

        Ok(())
    }

    /// Adjusts the quantity of a line by `delta`.
    ///
    /// ## Behavior
    /// - `quantity + delta < 1`: the line is removed
    /// - otherwise: the quantity is replaced, position kept
    /// - id not in cart: `LineNotInCart`, cart unchanged
    pub fn update_quantity(&mut self, id: CatalogId, delta: i64) -> CoreResult<QuantityChange> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id == id)
            .ok_or(CoreError::LineNotInCart(id))?;

        let new_quantity = self.lines[index]
            .quantity
            .checked_add(delta)
            .ok_or(CoreError::QuantityOverflow { id })?;

        if new_quantity < 1 {
            self.lines.remove(index);
            return Ok(QuantityChange::Removed);
        }

        self.check_fits(id, self.lines[index].unit_price, new_quantity)?;
        self.lines[index].quantity = new_quantity;
        Ok(QuantityChange::Updated(new_quantity))
    }

    /// Checks that the cart with line `id` at `new_quantity` still has
    /// totals that fit in an `i64`.
    fn check_fits(&self, id: CatalogId, unit_price: Money, new_quantity: i64) -> CoreResult<()> {
        let overflow = || CoreError::QuantityOverflow { id };

        let others = self
            .lines
            .iter()
            .filter(|l| l.id != id)
            .map(|l| (l.unit_price, l.quantity));

        let mut total_quantity: i64 = 0;
        let mut subtotal = Money::zero();
        for (price, quantity) in others.chain(std::iter::once((unit_price, new_quantity))) {
            total_quantity = total_quantity.checked_add(quantity).ok_or_else(overflow)?;
            let line_total = price.checked_multiply_quantity(quantity).ok_or_else(overflow)?;
            subtotal = subtotal.checked_add(line_total).ok_or_else(overflow)?;
        }

        subtotal
            .checked_add(subtotal.calculate_tax(GST_RATE))
            .ok_or_else(overflow)?;
        Ok(())
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in first-added order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up a line by catalog id.
    pub fn line(&self, id: CatalogId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Returns the number of distinct items in the cart.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
