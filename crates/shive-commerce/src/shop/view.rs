//! Shop page view model.

use crate::catalog::{Catalog, Product, ALL_CATEGORIES};
use crate::ids::ProductId;
use crate::search::{filter_by_category, highlight_matches, search, HandoffSlot, SearchHandoff};
use crate::shop::ShopLocation;
use tracing::debug;

/// State of the shop page.
///
/// The page shows either the category grid or a product listing. A listing
/// comes from an active search if there is one, otherwise from the selected
/// category.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopView {
    selected_category: String,
    show_filtered: bool,
    active_search: Option<SearchHandoff>,
}

impl Default for ShopView {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            show_filtered: false,
            active_search: None,
        }
    }
}

impl ShopView {
    /// The category grid with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the shop page at `location`.
    ///
    /// A staged handoff is consumed first (and so cleared). A `search`
    /// parameter in the location is then re-run against the catalog and
    /// takes precedence.
    pub fn open(catalog: &Catalog, location: &ShopLocation, slot: &mut HandoffSlot) -> Self {
        let mut view = Self::new();

        if let Some(handoff) = slot.take() {
            debug!(term = %handoff.term, "shop opened from staged search");
            view.show_search(handoff);
        }

        if let Some(term) = &location.search {
            let results = search(catalog.products(), term);
            view.show_search(SearchHandoff::new(term.clone(), results));
        }

        view
    }

    /// Show results of a search.
    pub fn show_search(&mut self, handoff: SearchHandoff) {
        self.active_search = Some(handoff);
        self.show_filtered = true;
    }

    /// Pick a category from the grid. Drops any active search.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.show_filtered = true;
        self.active_search = None;
    }

    /// Return to the category grid and reset all filters.
    ///
    /// Returns the location to navigate to, which drops any `search` parameter.
    pub fn back_to_categories(&mut self) -> ShopLocation {
        self.show_filtered = false;
        self.active_search = None;
        self.selected_category = ALL_CATEGORIES.to_string();
        ShopLocation::shop()
    }

    /// Check whether the product listing (rather than the grid) is shown.
    pub fn is_showing_products(&self) -> bool {
        self.show_filtered
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn active_search(&self) -> Option<&SearchHandoff> {
        self.active_search.as_ref()
    }

    /// Products for the listing.
    pub fn display_products(&self, catalog: &Catalog) -> Vec<Product> {
        match &self.active_search {
            Some(handoff) => handoff.results.clone(),
            None => filter_by_category(catalog.products(), &self.selected_category),
        }
    }

    /// Heading for the listing.
    pub fn title(&self) -> String {
        match &self.active_search {
            Some(handoff) => format!("Search Results for \"{}\"", handoff.term),
            None if self.selected_category == ALL_CATEGORIES => "All Products".to_string(),
            None => self.selected_category.clone(),
        }
    }

    /// Subtitle such as `5 products found`.
    pub fn subtitle(&self, catalog: &Catalog) -> String {
        format!("{} products found", self.display_products(catalog).len())
    }

    /// Displayed products to highlight for the active search.
    pub fn highlighted(&self, catalog: &Catalog) -> Vec<ProductId> {
        match &self.active_search {
            Some(handoff) if !handoff.term.is_empty() => {
                highlight_matches(&self.display_products(catalog), &handoff.term)
            }
            _ => Vec::new(),
        }
    }
}
