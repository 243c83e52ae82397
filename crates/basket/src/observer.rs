//! Change observation (single observer per cart).
//!
//! A cart calls its observer synchronously, after the mutation has been
//! applied and before the mutating method returns. The observer only gets a
//! shared borrow of the cart, so it can inspect the new state but cannot
//! mutate the cart from inside the callback.

use std::sync::mpsc;
use std::time::Duration;

use crate::cart::Cart;
use crate::change::CartChange;

/// Receives a notification after every successful cart mutation.
pub trait CartObserver<T> {
    fn on_change(&mut self, cart: &Cart<T>, change: CartChange);
}

impl<T, F> CartObserver<T> for F
where
    F: FnMut(&Cart<T>, CartChange),
{
    fn on_change(&mut self, cart: &Cart<T>, change: CartChange) {
        self(cart, change)
    }
}

/// A subscription to the changes forwarded by a [`ChannelObserver`].
///
/// Changes arrive in the order the cart applied them.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: mpsc::Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: mpsc::Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Take every message that is already queued.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Observer that forwards every change into a channel.
///
/// Useful when the consumer lives elsewhere (another thread, a UI loop) or
/// in tests. If the subscription has been dropped, changes are discarded.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::Sender<CartChange>,
}

impl ChannelObserver {
    pub fn new() -> (Self, Subscription<CartChange>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, Subscription::new(receiver))
    }
}

impl<T> CartObserver<T> for ChannelObserver {
    fn on_change(&mut self, _cart: &Cart<T>, change: CartChange) {
        if self.sender.send(change).is_err() {
            tracing::debug!(change = %change, "subscription dropped; change discarded");
        }
    }
}
