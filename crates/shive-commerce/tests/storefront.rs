//! End-to-end storefront flows: search from the navigation bar, hand the
//! results to the shop page, and fill the cart from the listing.

use shive_commerce::prelude::*;
use shive_commerce::search::{stage_in_store, take_from_store};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn serum() -> Product {
    Product::new(1, "Rose Gold Serum", 2999, Category::Beauty)
        .with_image("beauty.png")
        .with_brand("ROSE")
        .with_rating(4.5)
        .with_description("Hydrating facial serum with vitamin C")
}

#[test]
fn serum_found_by_name_description_and_brand() {
    let catalog = Catalog::new(vec![
        serum(),
        Product::new(2, "Casual Shirt", 3999, Category::Fashion).with_brand("Lh"),
    ])
    .unwrap();

    let by_name = search(catalog.products(), "serum");
    assert!(by_name.iter().any(|p| p.id == ProductId::new(1)));

    let by_brand = search(catalog.products(), "ROSE");
    assert!(by_brand.iter().any(|p| p.id == ProductId::new(1)));
    assert_eq!(by_brand.len(), 1);
}

#[test]
fn cart_add_two_then_totals() {
    let catalog = BuiltinCatalog.load().unwrap();
    let a = catalog.get(ProductId::new(1)).unwrap().clone();
    let b = catalog.get(ProductId::new(18)).unwrap().clone();

    let mut cart = CartStore::new();
    cart.add_item(a.clone());
    cart.add_item(b.clone());

    assert_eq!(cart.items(), &[a.clone(), b.clone()]);
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.total(), a.price + b.price);
}

#[test]
fn cart_duplicate_add_removed_in_one_call() {
    let mut cart = CartStore::new();
    cart.add_item(serum());
    cart.add_item(serum());
    cart.remove_item(serum().id);
    assert!(cart.is_empty());
}

#[test]
fn cart_remove_absent_id_leaves_cart() {
    let mut cart = CartStore::new();
    cart.add_item(serum());
    cart.remove_item(ProductId::new(999));
    assert_eq!(cart.items(), &[serum()]);
}

#[test]
fn search_handoff_to_shop_then_cart() {
    let catalog = BuiltinCatalog.load().unwrap();
    let mut slot = HandoffSlot::new();
    let mut cart = CartStore::new();

    let badge = Arc::new(AtomicUsize::new(0));
    let badge_sink = Arc::clone(&badge);
    cart.subscribe(move |event| badge_sink.store(event.summary.count, Ordering::SeqCst));

    // Navigation bar: submit, stage, navigate.
    let outcome = submit_search(&catalog, "mixer").unwrap();
    let SearchOutcome::Found(handoff) = outcome else {
        panic!("mixer should match");
    };
    let location = ShopLocation::for_search(handoff.term.clone());
    slot.stage(handoff);
    assert_eq!(location.to_string(), "/shop?search=mixer");

    // Shop page: consume the handoff and list results.
    let view = ShopView::open(&catalog, &location, &mut slot);
    assert!(!slot.is_staged());
    assert_eq!(view.title(), "Search Results for \"mixer\"");
    let listing = view.display_products(&catalog);
    assert_eq!(listing.len(), 2);

    // Add both, one of them twice.
    cart.add_item(listing[0].clone());
    cart.add_item(listing[1].clone());
    cart.add_item(listing[1].clone());
    assert_eq!(badge.load(Ordering::SeqCst), 3);
    assert_eq!(cart.total(), Price::new(3499 + 8999 * 2));

    cart.remove_item(listing[1].id);
    assert_eq!(badge.load(Ordering::SeqCst), 1);
    assert_eq!(cart.total(), Price::new(3499));
}

#[test]
fn invalid_and_empty_searches_are_distinguished() {
    let catalog = BuiltinCatalog.load().unwrap();

    assert!(matches!(
        submit_search(&catalog, "  "),
        Err(CommerceError::InvalidQuery)
    ));
    assert!(matches!(
        submit_search(&catalog, "hovercraft"),
        Ok(SearchOutcome::NoResults { .. })
    ));
}

#[test]
fn handoff_through_key_value_store_is_read_once() {
    let catalog = BuiltinCatalog.load().unwrap();
    let mut store = MemoryStore::new();

    let results = search(catalog.products(), "Electronics");
    stage_in_store(&mut store, &SearchHandoff::new("Electronics", results.clone())).unwrap();

    let read = take_from_store(&mut store).unwrap().unwrap();
    assert_eq!(read.term, "Electronics");
    assert_eq!(read.results, results);
    assert!(take_from_store(&mut store).unwrap().is_none());
}

#[test]
fn category_filter_all_and_unknown() {
    let catalog = BuiltinCatalog.load().unwrap();
    assert_eq!(
        filter_by_category(catalog.products(), ALL_CATEGORIES),
        catalog.products()
    );
    assert!(filter_by_category(catalog.products(), "NoSuchCategory").is_empty());
}
