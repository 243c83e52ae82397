use serde::Serialize;

use cart_core::Priceable;

/// One distinct entity held by a cart, with how many of it.
///
/// While an entry is inside a cart its quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<T> {
    pub(crate) entity: T,
    pub(crate) quantity: i64,
}

impl<T> Entry<T> {
    pub fn entity(&self) -> &T {
        &self.entity
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn into_parts(self) -> (T, i64) {
        (self.entity, self.quantity)
    }
}

impl<T: Priceable> Entry<T> {
    /// `price * quantity` for this entry.
    pub fn subtotal(&self) -> f64 {
        self.entity.price() * self.quantity as f64
    }
}
