//! Ready-made sellable item.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;
use crate::priceable::Priceable;

/// A catalog entry that can go straight into a cart.
///
/// Identity is the `id` alone: renaming or repricing an item does not make it
/// a different entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

impl CatalogItem {
    pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl PartialEq for CatalogItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CatalogItem {}

impl Priceable for CatalogItem {
    fn price(&self) -> f64 {
        self.price
    }
}
