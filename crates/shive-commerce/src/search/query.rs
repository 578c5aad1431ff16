//! Catalog queries: category filtering and text search.
//!
//! Both queries are pure: they preserve catalog order, never deduplicate,
//! and return the same output for the same input.

use crate::catalog::{Product, ALL_CATEGORIES};
use crate::error::CommerceError;
use crate::ids::ProductId;
use tracing::{debug, warn};

/// Restrict products to one category.
///
/// `"All"` passes every product through. Any other value is compared to the
/// product category name exactly (case-sensitive); an unknown name yields an
/// empty result.
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    let results: Vec<Product> = if category == ALL_CATEGORIES {
        products.to_vec()
    } else {
        products
            .iter()
            .filter(|p| p.category.as_str() == category)
            .cloned()
            .collect()
    };
    debug!(category, results = results.len(), "filter by category");
    results
}

/// Products where name, brand, category or description contains `term`,
/// ignoring case.
///
/// Callers reject empty terms with [`validate_term`] first; an empty term
/// here matches everything.
pub fn search(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    let results: Vec<Product> = products
        .iter()
        .filter(|p| matches_folded(p, &needle))
        .cloned()
        .collect();
    debug!(term, results = results.len(), "search");
    results
}

/// Check whether a product matches an already lowercased term.
fn matches_folded(product: &Product, needle: &str) -> bool {
    product
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Reject empty or whitespace-only search terms.
///
/// The term is returned as typed, untrimmed.
pub fn validate_term(term: &str) -> Result<&str, CommerceError> {
    if term.trim().is_empty() {
        warn!("rejected empty search term");
        return Err(CommerceError::InvalidQuery);
    }
    Ok(term)
}

/// Ids of products whose name contains `term`, ignoring case.
pub fn highlight_matches(products: &[Product], term: &str) -> Vec<ProductId> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .map(|p| p.id)
        .collect()
}
