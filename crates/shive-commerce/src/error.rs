//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Catalog queries and cart mutations never fail; these variants cover the
/// boundaries around them: validating user input and loading catalog data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Search term was empty or only whitespace.
    #[error("Please enter a search term")]
    InvalidQuery,

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog records share the same id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// Category name outside the closed category set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Catalog source could not be read.
    #[error("Failed to load catalog: {0}")]
    CatalogLoad(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_query_message() {
        assert_eq!(
            CommerceError::InvalidQuery.to_string(),
            "Please enter a search term"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: CommerceError = err.into();
        assert!(matches!(err, CommerceError::Serialization(_)));
    }
}
