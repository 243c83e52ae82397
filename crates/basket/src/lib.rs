//! Observable shopping cart.
//!
//! An in-memory, ordered list of distinct sellable entities with quantities,
//! derived totals, and a single synchronous change observer. Pure domain
//! logic: no IO, no persistence, no locking.

pub mod cart;
pub mod change;
pub mod entry;
pub mod observer;

pub use cart::Cart;
pub use change::CartChange;
pub use entry::Entry;
pub use observer::{CartObserver, ChannelObserver, Subscription};

pub use cart_core::{CartError, CartResult, CatalogItem, ItemId, Priceable};
