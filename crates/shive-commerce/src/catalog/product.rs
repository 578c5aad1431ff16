//! Product records.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A sellable item in the catalog.
///
/// Products are plain values: the catalog hands out clones, and the cart
/// stores full copies rather than references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name. Searchable.
    pub name: String,
    /// Price amount.
    pub price: Price,
    /// Category. Searchable.
    pub category: Category,
    /// Image reference (URL or asset name), not interpreted here.
    #[serde(default)]
    pub image: String,
    /// Brand name. Searchable.
    #[serde(default)]
    pub brand: String,
    /// Average rating in `[0, 5]`.
    #[serde(default)]
    pub rating: f64,
    /// Free text description. Searchable.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a product with empty descriptive fields.
    pub fn new(id: u32, name: impl Into<String>, price: u64, category: Category) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price: Price::new(price),
            category,
            image: String::new(),
            brand: String::new(),
            rating: 0.0,
            description: String::new(),
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating, clamped to `[0, 5]`.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating.clamp(0.0, MAX_RATING);
        self
    }

    /// The four fields text search looks at.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            &self.name,
            &self.brand,
            self.category.as_str(),
            &self.description,
        ]
    }

    /// Rating rounded to whole stars, e.g. `★★★★☆` for 4.4.
    pub fn rating_stars(&self) -> String {
        let filled = self.rating.clamp(0.0, MAX_RATING).round() as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}
