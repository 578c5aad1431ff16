//! Change notification for stateful stores.
//!
//! Stores own an [`Observers`] list and call [`Observers::notify`] after each
//! mutation has been applied, so a subscriber always reads post-mutation state.

use crate::ids::SubscriptionId;

type Callback<E> = Box<dyn FnMut(&E) + Send>;

/// Ordered list of subscriber callbacks for events of type `E`.
pub struct Observers<E> {
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Observers<E> {
    /// Create an empty observer list.
    pub fn new() -> Self {
        Self {
            next_id: SubscriptionId::new(0),
            subscribers: Vec::new(),
        }
    }

    /// Register a callback. Callbacks run in subscription order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&E) + Send + 'static,
    {
        let id = self.next_id;
        self.next_id = id.next();
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() < len_before
    }

    /// Deliver an event to every subscriber.
    pub fn notify(&mut self, event: &E) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(event);
        }
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Check if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
