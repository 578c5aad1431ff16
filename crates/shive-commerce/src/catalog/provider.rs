//! Catalog sources.

use crate::catalog::{builtin, Catalog, Product};
use crate::error::CommerceError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// A read-only source of the full product catalog.
///
/// Providers load synchronously and in full; there is no partial or
/// streaming load.
pub trait CatalogProvider {
    /// Load the catalog.
    fn load(&self) -> Result<Catalog, CommerceError>;
}

/// The S-Hive catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogProvider for BuiltinCatalog {
    fn load(&self) -> Result<Catalog, CommerceError> {
        let catalog = Catalog::new(builtin::products())?;
        info!(source = "builtin", products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

/// A catalog read from a JSON or TOML file.
///
/// JSON files hold either a bare array of products or an object with a
/// `products` array. Any other extension is parsed as TOML with a
/// `[[products]]` table array.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    products: Vec<Product>,
}

impl FileCatalog {
    /// Create a provider for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this provider reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog text, choosing the format from the file extension.
    pub fn parse(path: &Path, content: &str) -> Result<Vec<Product>, CommerceError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(match serde_json::from_str::<JsonCatalog>(content)? {
                JsonCatalog::Bare(products) => products,
                JsonCatalog::Wrapped { products } => products,
            })
        } else {
            Ok(toml::from_str::<TomlCatalog>(content)?.products)
        }
    }
}

impl CatalogProvider for FileCatalog {
    fn load(&self) -> Result<Catalog, CommerceError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| CommerceError::CatalogLoad(format!("{}: {}", self.path.display(), e)))?;
        let catalog = Catalog::new(Self::parse(&self.path, &content)?)?;
        info!(
            source = %self.path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;

    #[test]
    fn test_builtin_catalog() {
        let catalog = BuiltinCatalog.load().unwrap();
        assert_eq!(catalog.len(), 27);
        assert_eq!(catalog.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_parse_bare_json() {
        let json = r#"[{"id": 1, "name": "Basketball", "price": 2999, "category": "Sports"}]"#;
        let products = FileCatalog::parse(Path::new("c.json"), json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category, Category::Sports);
    }

    #[test]
    fn test_parse_wrapped_json() {
        let json = r#"{"products": [{"id": 4, "name": "Pan", "price": 10, "category": "Kitchen"}]}"#;
        let products = FileCatalog::parse(Path::new("c.JSON"), json).unwrap();
        assert_eq!(products[0].id, ProductId::new(4));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[[products]]
id = 10
name = "NIKE FLYKNIT"
price = 14999
category = "Shoes"
brand = "Nike"
rating = 4.8
"#;
        let products = FileCatalog::parse(Path::new("catalog.toml"), toml).unwrap();
        assert_eq!(products[0].brand, "Nike");
        assert_eq!(products[0].rating, 4.8);
    }

    #[test]
    fn test_parse_unknown_category_fails() {
        let json = r#"[{"id": 1, "name": "Toy", "price": 1, "category": "Toys"}]"#;
        let err = FileCatalog::parse(Path::new("c.json"), json).unwrap_err();
        assert!(matches!(err, CommerceError::Serialization(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FileCatalog::new("/nonexistent/catalog.json").load().unwrap_err();
        assert!(matches!(err, CommerceError::CatalogLoad(_)));
    }
}
