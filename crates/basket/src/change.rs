use serde::{Deserialize, Serialize};

/// What kind of mutation a cart just went through, and where.
///
/// Indices refer to the cart as it was *when the change was applied*: for
/// `Delete` that is the position the entry occupied before removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartChange {
    /// A new entry was appended at `at`.
    Add { at: usize },
    /// The entry at `at` had its quantity increased.
    Increment { at: usize },
    /// The entry at `at` had its quantity decreased (and is still present).
    Decrement { at: usize },
    /// The entry at `at` was removed.
    Delete { at: usize },
    /// Every entry was removed at once.
    Clean,
}

impl CartChange {
    /// Position carried by the change, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            CartChange::Add { at }
            | CartChange::Increment { at }
            | CartChange::Decrement { at }
            | CartChange::Delete { at } => Some(at),
            CartChange::Clean => None,
        }
    }

    /// Stable change name (e.g. "cart.item.added").
    pub fn event_type(&self) -> &'static str {
        match self {
            CartChange::Add { .. } => "cart.item.added",
            CartChange::Increment { .. } => "cart.item.incremented",
            CartChange::Decrement { .. } => "cart.item.decremented",
            CartChange::Delete { .. } => "cart.item.deleted",
            CartChange::Clean => "cart.cleaned",
        }
    }
}

impl core::fmt::Display for CartChange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.index() {
            Some(at) => write!(f, "{}@{}", self.event_type(), at),
            None => f.write_str(self.event_type()),
        }
    }
}
