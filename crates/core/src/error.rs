//! Cart error model.

use thiserror::Error;

/// Result type used across the cart crates.
pub type CartResult<T> = Result<T, CartError>;

/// Cart-level error.
///
/// Every variant is recoverable: a failed call leaves the cart exactly as it
/// was before the call and fires no notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// An index-addressed operation was given a position outside `0..count`.
    #[error("index {index} out of range for cart with {count} entries")]
    IndexOutOfRange { index: usize, count: usize },

    /// `add` was called with a quantity that is not strictly positive.
    #[error("invalid quantity: {0} (must be positive)")]
    InvalidQuantity(i64),

    /// Applying the change at `at` would push the cart-wide total quantity
    /// past `i64::MAX`.
    #[error("quantity overflow for entry at index {at}")]
    QuantityOverflow { at: usize },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CartError {
    pub fn out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
