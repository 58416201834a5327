//! # raira-core: Pure Business Logic for RairaTech Billing
//!
//! This crate is the **heart** of the billing tool. It contains the catalog,
//! the cart transitions, the invoice arithmetic and the print document
//! renderer as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     RairaTech Billing Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 raira-billing (CLI / session)                   │   │
//! │  │    select ──► qty ──► add ──► inc/dec ──► bill ──► print        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ raira-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐   │   │
//! │  │  │ catalog │ │  money  │ │  cart   │ │ invoice │ │  print  │   │   │
//! │  │  │  items  │ │  Money  │ │  Cart   │ │ totals  │ │  HTML   │   │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILESYSTEM • NO CLOCK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogId, CatalogItem, TaxRate)
//! - [`money`] - Money type with integer arithmetic and rupee formatting
//! - [`catalog`] - The fixed item catalog
//! - [`cart`] - Cart and its transitions
//! - [`invoice`] - Subtotal / tax / total derivation
//! - [`print`] - Print document rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use raira_core::{catalog, Cart, CatalogId, Invoice};
//!
//! let stamp = catalog::find(CatalogId::new(1)).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(stamp, 2).unwrap();
//!
//! let invoice = Invoice::from_cart(&cart);
//! assert_eq!(invoice.subtotal.to_string(), "₹100.00");
//! assert_eq!(invoice.tax.to_string(), "₹10.00");
//! assert_eq!(invoice.total.to_string(), "₹110.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod print;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, QuantityChange};
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceLine, GST_RATE};
pub use money::Money;
pub use print::PrintHeader;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted by a single add.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Repeated adds may still accumulate past this value.
pub const MAX_ITEM_QUANTITY: i64 = 999;
