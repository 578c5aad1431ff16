//! Cart handle for multi-threaded hosts.

use crate::cart::{CartEvent, CartStore, CartSummary};
use crate::catalog::Product;
use crate::ids::{ProductId, SubscriptionId};
use crate::money::Price;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one [`CartStore`] behind a mutex.
///
/// Every operation takes the lock for its whole duration, so adds and
/// removes apply in lock-acquisition order exactly as on a single thread.
/// Subscriber callbacks run while the lock is held and must not call back
/// into the same handle.
#[derive(Debug, Clone, Default)]
pub struct SharedCartStore {
    inner: Arc<Mutex<CartStore>>,
}

impl SharedCartStore {
    /// Create a handle around an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing cart.
    pub fn from_store(store: CartStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add_item(&self, product: Product) {
        self.inner.lock().add_item(product);
    }

    pub fn remove_item(&self, id: ProductId) -> usize {
        self.inner.lock().remove_item(id)
    }

    pub fn count(&self) -> usize {
        self.inner.lock().count()
    }

    pub fn total(&self) -> Price {
        self.inner.lock().total()
    }

    /// Count and total read under one lock.
    pub fn summary(&self) -> CartSummary {
        self.inner.lock().summary()
    }

    /// Copy of the current entries.
    pub fn items(&self) -> Vec<Product> {
        self.inner.lock().items().to_vec()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent) + Send + 'static,
    {
        self.inner.lock().subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().unsubscribe(id)
    }

    /// Run a closure with exclusive access to the cart.
    pub fn with<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
