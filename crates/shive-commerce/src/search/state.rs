//! Search session state shared with the presentation layer.

use crate::catalog::Product;
use crate::ids::SubscriptionId;
use crate::observe::Observers;

/// What changed in a [`SearchState`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The term was replaced.
    TermChanged(String),
    /// New results were stored.
    ResultsChanged { count: usize },
    /// The in-progress flag flipped.
    SearchingChanged(bool),
    /// Everything was reset.
    Cleared,
}

/// Current search term, its results, and an in-progress flag.
#[derive(Debug, Default)]
pub struct SearchState {
    term: String,
    results: Vec<Product>,
    is_searching: bool,
    observers: Observers<SearchEvent>,
}

impl SearchState {
    /// Create an empty search state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    /// Replace the search term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        let event = SearchEvent::TermChanged(self.term.clone());
        self.observers.notify(&event);
    }

    /// Replace the results.
    pub fn set_results(&mut self, results: Vec<Product>) {
        self.results = results;
        let event = SearchEvent::ResultsChanged {
            count: self.results.len(),
        };
        self.observers.notify(&event);
    }

    /// Set the in-progress flag.
    pub fn set_searching(&mut self, searching: bool) {
        self.is_searching = searching;
        self.observers.notify(&SearchEvent::SearchingChanged(searching));
    }

    /// Reset term, results and flag.
    pub fn clear(&mut self) {
        self.term.clear();
        self.results.clear();
        self.is_searching = false;
        self.observers.notify(&SearchEvent::Cleared);
    }

    /// Get notified after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SearchEvent) + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Stop notifications for a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_initial_state() {
        let state = SearchState::new();
        assert_eq!(state.term(), "");
        assert!(state.results().is_empty());
        assert!(!state.is_searching());
    }

    #[test]
    fn test_updates_and_clear() {
        let mut state = SearchState::new();
        state.set_term("phone");
        state.set_searching(true);
        state.set_results(vec![Product::new(20, "Smartphone", 59999, Category::Electronics)]);
        state.set_searching(false);

        assert_eq!(state.term(), "phone");
        assert_eq!(state.results().len(), 1);

        state.clear();
        assert_eq!(state.term(), "");
        assert!(state.results().is_empty());
        assert!(!state.is_searching());
    }

    #[test]
    fn test_events_follow_mutations() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut state = SearchState::new();
        let sink = Arc::clone(&events);
        state.subscribe(move |e| sink.lock().push(e.clone()));

        state.set_term("laptop");
        state.set_results(Vec::new());
        state.clear();

        assert_eq!(
            *events.lock(),
            vec![
                SearchEvent::TermChanged("laptop".to_string()),
                SearchEvent::ResultsChanged { count: 0 },
                SearchEvent::Cleared,
            ]
        );
    }
}
