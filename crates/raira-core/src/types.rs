//! # Domain Types
//!
//! Core domain types used throughout RairaTech Billing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CatalogItem   │   │    CartLine     │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (CatalogId) │──►│  id (snapshot)  │   │  bps (u32)      │       │
//! │  │  name           │   │  name           │   │  1000 = 10%     │       │
//! │  │  unit_price     │   │  unit_price     │   └─────────────────┘       │
//! │  └─────────────────┘   │  quantity ≥ 1   │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Catalog Id
// =============================================================================

/// Identifier of a catalog item. Unique within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(u32);

impl CatalogId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        CatalogId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CatalogId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "item".to_string(),
            });
        }

        s.parse::<u32>()
            .map(CatalogId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "item".to_string(),
                reason: format!("'{}' is not a catalog number", s),
            })
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Shows whole percentages without decimals: `10%`, `8.25%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}%", self.percentage())
        }
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable item. Catalog items are defined statically and never
/// change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: CatalogId,

    /// Display name shown in the selector and on the bill.
    pub name: &'static str,

    /// Unit price (never negative).
    pub unit_price: Money,
}

impl CatalogItem {
    pub const fn new(id: u32, name: &'static str, unit_price: Money) -> Self {
        CatalogItem {
            id: CatalogId::new(id),
            name,
            unit_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
