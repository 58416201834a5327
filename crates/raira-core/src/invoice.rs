//! # Invoice Calculator
//!
//! Derives the bill figures from a cart. Nothing is cached: callers build a
//! fresh [`Invoice`] every time the bill is shown.
//!
//! ```text
//! subtotal = Σ unit_price × quantity
//! tax      = subtotal × GST_RATE      (10%, half-up to the paisa)
//! total    = subtotal + tax
//! ```

use serde::Serialize;

use crate::cart::{Cart, CartLine};
use crate::money::Money;
use crate::types::{CatalogId, TaxRate};

/// GST charged on every bill. Fixed; not configurable.
pub const GST_RATE: TaxRate = TaxRate::from_bps(1000);

/// Sum of all line totals.
pub fn subtotal(cart: &Cart) -> Money {
    cart.lines().iter().map(CartLine::line_total).sum()
}

/// GST on a subtotal.
#[inline]
pub fn tax(subtotal: Money) -> Money {
    subtotal.calculate_tax(GST_RATE)
}

/// Subtotal plus GST.
pub fn total(cart: &Cart) -> Money {
    let subtotal = subtotal(cart);
    subtotal + tax(subtotal)
}

/// One priced row of the bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub id: CatalogId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&CartLine> for InvoiceLine {
    fn from(line: &CartLine) -> Self {
        InvoiceLine {
            id: line.id,
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total: line.line_total(),
        }
    }
}

/// A computed bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub lines: Vec<InvoiceLine>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

impl Invoice {
    /// Computes the bill for the current cart.
    ///
    /// ## Example
    /// ```rust
    /// use raira_core::{catalog, Cart, CatalogId, Invoice, Money};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(catalog::get(CatalogId::new(4)).unwrap(), 1).unwrap();
    /// cart.add_item(catalog::get(CatalogId::new(5)).unwrap(), 1).unwrap();
    ///
    /// let invoice = Invoice::from_cart(&cart);
    /// assert_eq!(invoice.subtotal, Money::from_rupees(550));
    /// assert_eq!(invoice.tax, Money::from_rupees(55));
    /// assert_eq!(invoice.total, Money::from_rupees(605));
    /// ```
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = subtotal(cart);
        let tax = tax(subtotal);

        Invoice {
            lines: cart.lines().iter().map(InvoiceLine::from).collect(),
            subtotal,
            tax_rate: GST_RATE,
            tax,
            total: subtotal + tax,
        }
    }

    /// Checks if the bill has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
