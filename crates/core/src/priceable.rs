//! Priceable trait: what an entity must expose to be stored in a cart.

/// Capability required of every entity held by a cart.
///
/// Equality is the entity's identity contract: two values that compare equal
/// are treated as the *same* sellable entity, so a cart keeps one entry for
/// both and accumulates their quantities. Implementors usually compare a
/// stable identifier rather than every field (see [`crate::CatalogItem`]).
pub trait Priceable: PartialEq {
    /// Unit price, used only for the cart's monetary total.
    fn price(&self) -> f64;
}

impl<P: Priceable + ?Sized> Priceable for &P {
    fn price(&self) -> f64 {
        (**self).price()
    }
}
