//! Product catalog module.
//!
//! Contains product records, categories, the catalog container, and the
//! providers that load it.

mod builtin;
mod catalog;
mod category;
mod product;
mod provider;

pub use catalog::Catalog;
pub use category::{Category, ALL_CATEGORIES};
pub use product::{Product, MAX_RATING};
pub use provider::{BuiltinCatalog, CatalogProvider, FileCatalog};
