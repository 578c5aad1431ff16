//! The immutable product catalog.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use std::collections::HashSet;

/// Ordered, immutable sequence of products with unique ids.
///
/// Built once at startup by a [`CatalogProvider`](crate::catalog::CatalogProvider)
/// and only read afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if absent.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }

    /// Product count per category, in order of first appearance.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        self.categories()
            .into_iter()
            .map(|c| (c, self.products.iter().filter(|p| p.category == c).count()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Rose Gold Serum", 2999, Category::Beauty),
            Product::new(5, "Winter Sale Coat", 8999, Category::Fashion),
            Product::new(2, "Beauty Glow Cream", 3499, Category::Beauty),
        ]
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(sample()).unwrap();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 5, 2]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut products = sample();
        products.push(Product::new(5, "Copy", 1, Category::Shoes));
        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CommerceError::DuplicateProductId(id) if id.get() == 5));
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Beauty Glow Cream");
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert!(matches!(
            catalog.require(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(
            catalog.category_counts(),
            vec![(Category::Beauty, 2), (Category::Fashion, 1)]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
