//! `cart-core` — collaborator contracts shared by the cart crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod id;
pub mod item;
pub mod priceable;

pub use error::{CartError, CartResult};
pub use id::ItemId;
pub use item::CatalogItem;
pub use priceable::Priceable;
