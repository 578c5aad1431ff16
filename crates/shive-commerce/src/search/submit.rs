//! Search submission from the navigation bar.

use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::search::{search, validate_term, SearchHandoff};

/// Result of submitting a valid search term.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one product matched; stage this and open the shop page.
    Found(SearchHandoff),
    /// The term was valid but matched nothing.
    NoResults { term: String },
}

impl SearchOutcome {
    /// The term that was searched.
    pub fn term(&self) -> &str {
        match self {
            SearchOutcome::Found(handoff) => &handoff.term,
            SearchOutcome::NoResults { term } => term,
        }
    }

    /// Number of matching products.
    pub fn result_count(&self) -> usize {
        match self {
            SearchOutcome::Found(handoff) => handoff.results.len(),
            SearchOutcome::NoResults { .. } => 0,
        }
    }
}

/// Validate and run a search typed into the navigation bar.
///
/// Returns [`CommerceError::InvalidQuery`] for an empty or whitespace-only
/// term, without touching the catalog.
pub fn submit_search(catalog: &Catalog, raw_term: &str) -> Result<SearchOutcome, CommerceError> {
    let term = validate_term(raw_term)?;
    let results = search(catalog.products(), term);

    if results.is_empty() {
        Ok(SearchOutcome::NoResults {
            term: term.to_string(),
        })
    } else {
        Ok(SearchOutcome::Found(SearchHandoff::new(term, results)))
    }
}
