use cart_core::{CartError, CartResult, Priceable};

use crate::change::CartChange;
use crate::entry::Entry;
use crate::observer::CartObserver;

/// Ordered collection of distinct sellable entities and their quantities.
///
/// - Entries keep insertion order; removing one shifts the later entries down.
/// - No two entries hold entities that compare equal.
/// - Every entry has a quantity of at least 1.
/// - The sum of all quantities fits in an `i64`.
///
/// Each successful mutation notifies the registered observer (if any) exactly
/// once, synchronously, before returning. Failed calls change nothing and
/// notify nobody.
pub struct Cart<T> {
    entries: Vec<Entry<T>>,
    total_quantity: i64,
    observer: Option<Box<dyn CartObserver<T>>>,
}

impl<T> Cart<T> {
    /// Create an empty cart with no observer.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total_quantity: 0,
            observer: None,
        }
    }

    /// Number of distinct entries, regardless of their quantities.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the quantities of every entry.
    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    /// Entry at `index`, in current order.
    pub fn at(&self, index: usize) -> CartResult<&Entry<T>> {
        self.entries
            .get(index)
            .ok_or_else(|| CartError::out_of_range(index, self.entries.len()))
    }

    /// Non-failing variant of [`Cart::at`].
    pub fn get(&self, index: usize) -> Option<&Entry<T>> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Register the observer, replacing any previous one.
    ///
    /// While the observer runs it is out of its slot: `has_observer()`
    /// reports `false` from inside the callback. If the callback panics the
    /// observer is dropped and the cart is left without one; the mutation
    /// that triggered it has already been applied.
    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: CartObserver<T> + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Register a closure as the observer.
    ///
    /// Same as [`Cart::set_observer`], but lets the compiler infer the
    /// closure's argument types.
    pub fn set_observer_fn<F>(&mut self, f: F)
    where
        F: FnMut(&Cart<T>, CartChange) + 'static,
    {
        self.set_observer(f);
    }

    /// Remove the observer, returning it.
    pub fn clear_observer(&mut self) -> Option<Box<dyn CartObserver<T>>> {
        self.observer.take()
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    fn notify(&mut self, change: CartChange) {
        if let Some(mut observer) = self.observer.take() {
            observer.on_change(self, change);
            self.observer = Some(observer);
        }
    }

    fn check_index(&self, index: usize) -> CartResult<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            tracing::warn!(index, count = self.entries.len(), "cart index out of range");
            Err(CartError::out_of_range(index, self.entries.len()))
        }
    }

    /// Cart-wide total after adding `by` units at `at`.
    ///
    /// Every entry quantity is bounded by the total, so this also rules out
    /// overflow of a single entry.
    fn checked_total(&self, at: usize, by: i64) -> CartResult<i64> {
        self.total_quantity.checked_add(by).ok_or_else(|| {
            tracing::warn!(at, total = self.total_quantity, by, "cart quantity overflow");
            CartError::QuantityOverflow { at }
        })
    }

    /// Add `by` to the quantity at `at`; `at` must already be in range.
    fn raise(&mut self, at: usize, by: i64) -> CartResult<i64> {
        self.total_quantity = self.checked_total(at, by)?;
        let entry = &mut self.entries[at];
        entry.quantity += by;
        Ok(entry.quantity)
    }

    /// Increment the quantity of the entry at `index` by one.
    pub fn increment_at(&mut self, index: usize) -> CartResult<()> {
        self.check_index(index)?;
        let quantity = self.raise(index, 1)?;
        tracing::debug!(index, quantity, "cart item incremented");
        self.notify(CartChange::Increment { at: index });
        Ok(())
    }

    /// Decrement the quantity of the entry at `index` by one.
    ///
    /// An entry at quantity 1 is removed instead, and only `Delete` is
    /// reported.
    pub fn decrement_at(&mut self, index: usize) -> CartResult<()> {
        self.check_index(index)?;
        if self.entries[index].quantity > 1 {
            self.entries[index].quantity -= 1;
            self.total_quantity -= 1;
            tracing::debug!(
                index,
                quantity = self.entries[index].quantity,
                "cart item decremented"
            );
            self.notify(CartChange::Decrement { at: index });
        } else {
            self.remove_at(index)?;
        }
        Ok(())
    }

    /// Remove the entry at `index` whatever its quantity, returning it.
    pub fn remove_at(&mut self, index: usize) -> CartResult<Entry<T>> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        self.total_quantity -= removed.quantity;
        tracing::debug!(index, quantity = removed.quantity, "cart item deleted");
        self.notify(CartChange::Delete { at: index });
        Ok(removed)
    }

    /// Remove every entry. Reports `Clean` even when the cart was empty.
    pub fn clean(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.total_quantity = 0;
        tracing::debug!(dropped, "cart cleaned");
        self.notify(CartChange::Clean);
    }
}

impl<T: Clone> Cart<T> {
    /// Owned copy of the current entries.
    pub fn snapshot(&self) -> Vec<Entry<T>> {
        self.entries.clone()
    }
}

impl<T: Priceable> Cart<T> {
    /// Total to charge: `price * quantity` summed over entries, in order.
    pub fn amount(&self) -> f64 {
        self.entries.iter().fold(0.0, |acc, e| acc + e.subtotal())
    }

    /// Position of the entry whose entity equals `entity`.
    pub fn position(&self, entity: &T) -> Option<usize> {
        self.entries.iter().position(|e| e.entity == *entity)
    }

    pub fn contains(&self, entity: &T) -> bool {
        self.position(entity).is_some()
    }

    /// Add `quantity` of `entity`.
    ///
    /// If an equal entity is already present its quantity grows
    /// (`Increment`); otherwise a new entry is appended (`Add`). Fails with
    /// `QuantityOverflow` if the cart-wide total would exceed `i64::MAX`.
    pub fn add(&mut self, entity: T, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            tracing::warn!(quantity, "rejected cart add with non-positive quantity");
            return Err(CartError::InvalidQuantity(quantity));
        }

        match self.position(&entity) {
            Some(at) => {
                let total = self.raise(at, quantity)?;
                tracing::debug!(index = at, added = quantity, quantity = total, "cart item incremented");
                self.notify(CartChange::Increment { at });
            }
            None => {
                let at = self.entries.len();
                self.total_quantity = self.checked_total(at, quantity)?;
                self.entries.push(Entry { entity, quantity });
                tracing::debug!(index = at, quantity, "cart item added");
                self.notify(CartChange::Add { at });
            }
        }
        Ok(())
    }

    /// Add a single unit of `entity`.
    pub fn add_one(&mut self, entity: T) -> CartResult<()> {
        self.add(entity, 1)
    }

    /// Increment the entry holding `entity`.
    ///
    /// Returns `Ok(false)` without touching the cart when `entity` is not in it.
    pub fn increment(&mut self, entity: &T) -> CartResult<bool> {
        match self.position(entity) {
            Some(at) => self.increment_at(at).map(|()| true),
            None => {
                tracing::trace!("increment skipped: entity not in cart");
                Ok(false)
            }
        }
    }

    /// Decrement the entry holding `entity`, removing it at quantity 1.
    ///
    /// Returns `Ok(false)` without touching the cart when `entity` is not in it.
    pub fn decrement(&mut self, entity: &T) -> CartResult<bool> {
        match self.position(entity) {
            Some(at) => self.decrement_at(at).map(|()| true),
            None => {
                tracing::trace!("decrement skipped: entity not in cart");
                Ok(false)
            }
        }
    }
}

impl<T> Default for Cart<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Cart<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cart")
            .field("entries", &self.entries)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a Cart<T> {
    type Item = &'a Entry<T>;
    type IntoIter = core::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
