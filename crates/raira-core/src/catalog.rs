//! # Catalog
//!
//! The fixed list of purchasable items. The catalog is compiled in; there
//! is no pricing backend.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogId, CatalogItem};

/// Every item the counter sells, in selector order.
pub static ITEMS: [CatalogItem; 5] = [
    CatalogItem::new(1, "Stamp Circular - 50", Money::from_rupees(50)),
    CatalogItem::new(2, "Stamp Oval - 70", Money::from_rupees(70)),
    CatalogItem::new(3, "Stamp Box - 100", Money::from_rupees(100)),
    CatalogItem::new(4, "Flex Printing 50inchx50inch - 200", Money::from_rupees(200)),
    CatalogItem::new(5, "Flex Printing 100inchx100inch - 300", Money::from_rupees(350)),
];

/// Returns all catalog items.
#[inline]
pub fn all() -> &'static [CatalogItem] {
    &ITEMS
}

/// The item preselected when a session starts.
#[inline]
pub fn default_item() -> &'static CatalogItem {
    &ITEMS[0]
}

/// Looks an item up by id.
pub fn find(id: CatalogId) -> Option<&'static CatalogItem> {
    ITEMS.iter().find(|item| item.id == id)
}

/// Like [`find`], but an unknown id is an error.
///
/// ```rust
/// use raira_core::{catalog, CatalogId, CoreError};
///
/// assert_eq!(catalog::get(CatalogId::new(2)).unwrap().name, "Stamp Oval - 70");
/// assert_eq!(
///     catalog::get(CatalogId::new(9)),
///     Err(CoreError::UnknownCatalogItem(CatalogId::new(9)))
/// );
/// ```
pub fn get(id: CatalogId) -> CoreResult<&'static CatalogItem> {
    find(id).ok_or(CoreError::UnknownCatalogItem(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all().iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_prices_are_non_negative() {
        assert!(all().iter().all(|item| !item.unit_price.is_negative()));
    }

    #[test]
    fn test_default_item_is_first() {
        assert_eq!(default_item().id, CatalogId::new(1));
        assert_eq!(default_item().name, "Stamp Circular - 50");
    }

    #[test]
    fn test_flex_large_price() {
        // Name says 300 but the price list charges 350.
        let item = get(CatalogId::new(5)).unwrap();
        assert_eq!(item.unit_price, Money::from_rupees(350));
    }

    #[test]
    fn test_unknown_id() {
        assert!(find(CatalogId::new(0)).is_none());
        assert!(get(CatalogId::new(6)).is_err());
    }
}
