//! Product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pass-through category name: filtering by it returns the whole catalog.
pub const ALL_CATEGORIES: &str = "All";

/// The closed set of storefront categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Beauty,
    Fashion,
    Shoes,
    Sports,
    Electronics,
    Kitchen,
}

impl Category {
    /// Every category, in the order the catalog lists them.
    pub const ALL: [Category; 6] = [
        Category::Beauty,
        Category::Fashion,
        Category::Shoes,
        Category::Sports,
        Category::Electronics,
        Category::Kitchen,
    ];

    /// Display name, also the exact string category filters compare against.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beauty => "Beauty",
            Category::Fashion => "Fashion",
            Category::Shoes => "Shoes",
            Category::Sports => "Sports",
            Category::Electronics => "Electronics",
            Category::Kitchen => "Kitchen",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is exact and case-sensitive, like the category filter.
impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("beauty".parse::<Category>().is_err());
        assert!(matches!(
            "Toys".parse::<Category>(),
            Err(CommerceError::UnknownCategory(name)) if name == "Toys"
        ));
    }

    #[test]
    fn test_all_is_not_a_category() {
        assert!(ALL_CATEGORIES.parse::<Category>().is_err());
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, r#""Electronics""#);
    }
}
