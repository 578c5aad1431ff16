//! Catalog queries and cart state for the S-Hive storefront.
//!
//! This crate holds the storefront core that the presentation layer renders:
//!
//! - **Catalog**: Immutable product records, categories, catalog providers
//! - **Search**: Category filtering, case-insensitive multi-field search,
//!   search session state and the one-shot search handoff
//! - **Cart**: Cart store with add/remove semantics and change notification
//! - **Shop**: View model for the category grid / product listing page
//!
//! # Example
//!
//! ```rust
//! use shive_commerce::prelude::*;
//!
//! let catalog = BuiltinCatalog.load().unwrap();
//!
//! let serums = search(catalog.products(), "serum");
//! assert_eq!(serums[0].name, "Rose Gold Serum");
//!
//! let mut cart = CartStore::new();
//! cart.add_item(serums[0].clone());
//! cart.add_item(serums[0].clone());
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total(), Price::new(5998));
//!
//! cart.remove_item(serums[0].id);
//! assert!(cart.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod observe;

pub mod catalog;
pub mod cart;
pub mod search;
pub mod shop;

pub use error::CommerceError;
pub use ids::{ProductId, SubscriptionId};
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, SubscriptionId};
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{
        BuiltinCatalog, Catalog, CatalogProvider, Category, FileCatalog, Product,
        ALL_CATEGORIES,
    };

    // Cart
    pub use crate::cart::{CartEvent, CartOperation, CartStore, CartSummary, SharedCartStore};

    // Search
    pub use crate::search::{
        filter_by_category, highlight_matches, search, submit_search, validate_term,
        HandoffSlot, HandoffStore, MemoryStore, SearchEvent, SearchHandoff, SearchOutcome,
        SearchState,
    };

    // Shop
    pub use crate::shop::{ShopLocation, ShopView};
}
