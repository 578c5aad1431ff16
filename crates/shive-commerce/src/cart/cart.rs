//! Cart store.

use crate::catalog::Product;
use crate::ids::{ProductId, SubscriptionId};
use crate::money::Price;
use crate::observe::Observers;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Count and total of a cart at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartSummary {
    /// Number of entries, duplicates included.
    pub count: usize,
    /// Sum of entry prices, duplicates included.
    pub total: Price,
}

/// The mutation that produced a [`CartEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartOperation {
    /// A product was appended.
    Added(ProductId),
    /// Every entry with this id was dropped.
    Removed { id: ProductId, removed: usize },
}

/// Notification sent to cart subscribers after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEvent {
    pub operation: CartOperation,
    /// State after the mutation.
    pub summary: CartSummary,
}

/// The shopping cart.
///
/// An ordered list of product copies. Adding never merges: adding the same
/// product twice yields two entries. Removal is keyed by product id and
/// drops every entry with that id at once.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<Product>,
    observers: Observers<CartEvent>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product to the end of the cart.
    pub fn add_item(&mut self, product: Product) {
        let id = product.id;
        self.items.push(product);
        debug!(product_id = %id, count = self.count(), total = %self.total(), "cart item added");
        self.emit(CartOperation::Added(id));
    }

    /// Remove every entry whose id equals `id`.
    ///
    /// Returns how many entries were dropped; zero leaves the cart unchanged.
    pub fn remove_item(&mut self, id: ProductId) -> usize {
        let len_before = self.items.len();
        self.items.retain(|p| p.id != id);
        let removed = len_before - self.items.len();
        debug!(product_id = %id, removed, count = self.count(), "cart item removed");
        self.emit(CartOperation::Removed { id, removed });
        removed
    }

    /// Number of entries (not unique products).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of prices over all entries.
    pub fn total(&self) -> Price {
        self.items.iter().map(|p| p.price).sum()
    }

    /// Count and total together.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            count: self.count(),
            total: self.total(),
        }
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if any entry has this id.
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Number of entries with this id.
    pub fn quantity_of(&self, id: ProductId) -> usize {
        self.items.iter().filter(|p| p.id == id).count()
    }

    /// Entries grouped by id, ordered by first appearance.
    ///
    /// This is a display view; storage keeps one entry per add.
    pub fn grouped(&self) -> Vec<(&Product, usize)> {
        let mut groups: Vec<(&Product, usize)> = Vec::new();
        for item in &self.items {
            match groups.iter().position(|(p, _)| p.id == item.id) {
                Some(index) => groups[index].1 += 1,
                None => groups.push((item, 1)),
            }
        }
        groups
    }

    /// Get notified after every add or remove.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent) + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Stop notifications for a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn emit(&mut self, operation: CartOperation) {
        let event = CartEvent {
            operation,
            summary: self.summary(),
        };
        self.observers.notify(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn product_a() -> Product {
        Product::new(1, "Rose Gold Serum", 2999, Category::Beauty)
    }

    fn product_b() -> Product {
        Product::new(12, "Basketball", 2999, Category::Sports)
    }

    fn product_c() -> Product {
        Product::new(19, "Gaming Laptop", 39999, Category::Electronics)
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Price::zero());
    }

    #[test]
    fn test_add_preserves_order() {
        let mut cart = CartStore::new();
        cart.add_item(product_a());
        cart.add_item(product_c());

        assert_eq!(cart.items(), &[product_a(), product_c()]);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Price::new(2999 + 39999));
    }

    #[test]
    fn test_add_same_item_twice_keeps_both() {
        let mut cart = CartStore::new();
        cart.add_item(product_a());
        cart.add_item(product_a());

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.quantity_of(product_a().id), 2);
        assert_eq!(cart.total(), Price::new(5998));
    }

    #[test]
    fn test_remove_drops_all_duplicates() {
        let mut cart = CartStore::new();
        cart.add_item(product_a());
        cart.add_item(product_b());
        cart.add_item(product_a());

        assert_eq!(cart.remove_item(product_a().id), 2);
        assert_eq!(cart.items(), &[product_b()]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(product_a());

        assert_eq!(cart.remove_item(ProductId::new(999)), 0);
        assert_eq!(cart.items(), &[product_a()]);
    }

    #[test]
    fn test_grouped() {
        let mut cart = CartStore::new();
        cart.add_item(product_b());
        cart.add_item(product_a());
        cart.add_item(product_b());

        let groups: Vec<(u32, usize)> = cart
            .grouped()
            .into_iter()
            .map(|(p, qty)| (p.id.get(), qty))
            .collect();
        assert_eq!(groups, vec![(12, 2), (1, 1)]);
        // Storage is untouched.
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_events_carry_post_mutation_summary() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut cart = CartStore::new();
        let sink = Arc::clone(&events);
        cart.subscribe(move |e| sink.lock().push(e.clone()));

        cart.add_item(product_a());
        cart.add_item(product_a());
        cart.remove_item(product_a().id);
        cart.remove_item(ProductId::new(999));

        let events = events.lock();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].operation, CartOperation::Added(ProductId::new(1)));
        assert_eq!(events[1].summary, CartSummary { count: 2, total: Price::new(5998) });
        assert_eq!(
            events[2].operation,
            CartOperation::Removed { id: ProductId::new(1), removed: 2 }
        );
        assert_eq!(events[2].summary, CartSummary::default());
        assert_eq!(
            events[3].operation,
            CartOperation::Removed { id: ProductId::new(999), removed: 0 }
        );
    }

    #[test]
    fn test_unsubscribe_stops_events() {
        let hits = Arc::new(Mutex::new(0));
        let mut cart = CartStore::new();
        let counter = Arc::clone(&hits);
        let id = cart.subscribe(move |_| *counter.lock() += 1);

        cart.add_item(product_a());
        assert!(cart.unsubscribe(id));
        cart.add_item(product_b());

        assert_eq!(*hits.lock(), 1);
    }
}
