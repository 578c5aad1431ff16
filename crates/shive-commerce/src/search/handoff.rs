//! One-shot handoff of search results between navigation steps.
//!
//! A search started from the navigation bar is displayed by the shop page.
//! The pair `(term, results)` is staged once and consumed at most once;
//! reading it clears it so a later visit never shows stale results.

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Staging key holding the raw search term.
pub const TERM_KEY: &str = "searchTerm";

/// Staging key holding the JSON-encoded result list.
pub const RESULTS_KEY: &str = "searchResults";

/// A search term together with the results it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHandoff {
    /// The term as the user typed it.
    pub term: String,
    /// Matching products in catalog order.
    pub results: Vec<Product>,
}

impl SearchHandoff {
    /// Create a handoff record.
    pub fn new(term: impl Into<String>, results: Vec<Product>) -> Self {
        Self {
            term: term.into(),
            results,
        }
    }

    /// Encode as the two string-keyed staging entries.
    pub fn to_entries(&self) -> Result<[(&'static str, String); 2], CommerceError> {
        Ok([
            (TERM_KEY, self.term.clone()),
            (RESULTS_KEY, serde_json::to_string(&self.results)?),
        ])
    }

    /// Decode from the two staging entry values.
    pub fn from_entries(term: &str, results_json: &str) -> Result<Self, CommerceError> {
        Ok(Self {
            term: term.to_string(),
            results: serde_json::from_str(results_json)?,
        })
    }
}

/// Holder for at most one pending [`SearchHandoff`].
#[derive(Debug, Clone, Default)]
pub struct HandoffSlot {
    pending: Option<SearchHandoff>,
}

impl HandoffSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a handoff, replacing any unread one.
    pub fn stage(&mut self, handoff: SearchHandoff) {
        debug!(term = %handoff.term, results = handoff.results.len(), "search handoff staged");
        self.pending = Some(handoff);
    }

    /// Take the staged handoff, leaving the slot empty.
    pub fn take(&mut self) -> Option<SearchHandoff> {
        self.pending.take()
    }

    /// Check if a handoff is waiting to be read.
    pub fn is_staged(&self) -> bool {
        self.pending.is_some()
    }
}

/// A transient string key-value staging area.
pub trait HandoffStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value.
    fn set(&mut self, key: &str, value: String);
    /// Delete a value.
    fn remove(&mut self, key: &str);
}

/// In-process [`HandoffStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HandoffStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Write a handoff into a key-value store under both staging keys.
pub fn stage_in_store<S: HandoffStore + ?Sized>(
    store: &mut S,
    handoff: &SearchHandoff,
) -> Result<(), CommerceError> {
    for (key, value) in handoff.to_entries()? {
        store.set(key, value);
    }
    Ok(())
}

/// Read a handoff out of a key-value store.
///
/// Both keys are removed once both were present, so the next call returns
/// `None`. If only one key is present nothing is read or removed.
pub fn take_from_store<S: HandoffStore + ?Sized>(
    store: &mut S,
) -> Result<Option<SearchHandoff>, CommerceError> {
    let (Some(term), Some(results)) = (store.get(TERM_KEY), store.get(RESULTS_KEY)) else {
        return Ok(None);
    };
    store.remove(RESULTS_KEY);
    store.remove(TERM_KEY);
    SearchHandoff::from_entries(&term, &results).map(Some)
}
