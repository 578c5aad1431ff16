//! Interactive shopping session.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use shive_commerce::prelude::*;
use tracing::info;

use super::print_products;
use crate::context::Context;
use crate::output::cart_badge;

/// State behind one `shive shop` run.
///
/// Searches go through the handoff slot the same way the navigation bar
/// hands results to the shop page. The badge is kept current by a cart
/// subscriber rather than by polling the cart.
pub(crate) struct ShopSession {
    catalog: Catalog,
    cart: CartStore,
    slot: HandoffSlot,
    view: ShopView,
    badge: Arc<AtomicUsize>,
}

impl ShopSession {
    pub(crate) fn new(catalog: Catalog) -> Self {
        let badge = Arc::new(AtomicUsize::new(0));
        let mut cart = CartStore::new();
        let sink = Arc::clone(&badge);
        cart.subscribe(move |event| sink.store(event.summary.count, Ordering::SeqCst));

        Self {
            catalog,
            cart,
            slot: HandoffSlot::new(),
            view: ShopView::new(),
            badge,
        }
    }

    /// Item count as last reported to the subscriber.
    pub(crate) fn badge(&self) -> usize {
        self.badge.load(Ordering::SeqCst)
    }

    pub(crate) fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub(crate) fn view(&self) -> &ShopView {
        &self.view
    }

    /// Submit a search. Matches are staged and the shop page reopened on them;
    /// a search with no matches leaves the page as it was.
    pub(crate) fn search(&mut self, term: &str) -> Result<SearchOutcome, CommerceError> {
        let outcome = submit_search(&self.catalog, term)?;
        if let SearchOutcome::Found(handoff) = &outcome {
            self.slot.stage(handoff.clone());
            self.view = ShopView::open(&self.catalog, &ShopLocation::shop(), &mut self.slot);
        }
        Ok(outcome)
    }

    pub(crate) fn browse(&mut self, category: &str) {
        self.view.select_category(category);
    }

    pub(crate) fn back_to_categories(&mut self) {
        self.view.back_to_categories();
    }

    /// Products the user can pick from: the listing if one is shown,
    /// otherwise the whole catalog.
    pub(crate) fn choices(&self) -> Vec<Product> {
        if self.view.is_showing_products() {
            self.view.display_products(&self.catalog)
        } else {
            self.catalog.products().to_vec()
        }
    }

    pub(crate) fn add(&mut self, product: Product) {
        info!(id = %product.id, "added to cart");
        self.cart.add_item(product);
    }

    pub(crate) fn remove(&mut self, id: ProductId) -> usize {
        self.cart.remove_item(id)
    }
}

/// Run the shop command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        anyhow::bail!("The shop session is interactive and has no JSON output");
    }

    let mut session = ShopSession::new(ctx.catalog()?);
    let theme = ColorfulTheme::default();
    let actions = [
        "Search",
        "Browse category",
        "Add to cart",
        "Remove from cart",
        "View cart",
        "Back to categories",
        "Quit",
    ];

    ctx.output
        .header(&format!("Welcome to {}", ctx.config.store.name));

    loop {
        let prompt = format!("{} | {}", session.view().title(), cart_badge(session.badge()));
        let action = Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[action] {
            "Search" => {
                let term: String = Input::with_theme(&theme)
                    .with_prompt("Search products")
                    .allow_empty(true)
                    .interact_text()?;
                match session.search(&term) {
                    Ok(SearchOutcome::NoResults { term }) => {
                        ctx.output
                            .warn(&format!("No products found matching \"{}\"", term));
                    }
                    Ok(SearchOutcome::Found(_)) => show_listing(ctx, &session),
                    Err(e) => ctx.output.warn(&e.to_string()),
                }
            }
            "Browse category" => {
                let mut names = vec![ALL_CATEGORIES];
                names.extend(Category::ALL.iter().map(|c| c.as_str()));
                let picked = Select::with_theme(&theme)
                    .with_prompt("Category")
                    .items(&names)
                    .default(0)
                    .interact()?;
                session.browse(names[picked]);
                show_listing(ctx, &session);
            }
            "Add to cart" => {
                let choices = session.choices();
                if choices.is_empty() {
                    ctx.output.info("Nothing to add here");
                    continue;
                }
                let labels: Vec<String> = choices
                    .iter()
                    .map(|p| format!("{} ({})", p.name, ctx.price(p.price)))
                    .collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Add which product?")
                    .items(&labels)
                    .default(0)
                    .interact_opt()?;
                if let Some(i) = picked {
                    let product = choices[i].clone();
                    ctx.output.success(&format!("Added {}", product.name));
                    session.add(product);
                }
            }
            "Remove from cart" => {
                if session.cart().is_empty() {
                    ctx.output.info("Your cart is empty");
                    continue;
                }
                let entries: Vec<(ProductId, String)> = session
                    .cart()
                    .grouped()
                    .into_iter()
                    .map(|(p, qty)| (p.id, format!("{} x{}", p.name, qty)))
                    .collect();
                let labels: Vec<&str> = entries.iter().map(|(_, l)| l.as_str()).collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Remove which product?")
                    .items(&labels)
                    .default(0)
                    .interact_opt()?;
                if let Some(i) = picked {
                    let removed = session.remove(entries[i].0);
                    ctx.output.success(&format!("Removed {} item(s)", removed));
                }
            }
            "View cart" => show_cart(ctx, session.cart()),
            "Back to categories" => session.back_to_categories(),
            _ => break,
        }
    }

    show_cart(ctx, session.cart());
    Ok(())
}

fn show_listing(ctx: &Context, session: &ShopSession) {
    let catalog = &session.catalog;
    let view = session.view();
    ctx.output.header(&view.title());
    ctx.output.info(&view.subtitle(catalog));
    print_products(ctx, &view.display_products(catalog), &view.highlighted(catalog));
}

fn show_cart(ctx: &Context, cart: &CartStore) {
    ctx.output.header(&cart_badge(cart.count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }
    for (product, qty) in cart.grouped() {
        let line_total: Price = std::iter::repeat(product.price).take(qty).sum();
        ctx.output.kv(
            &format!("{} x{}", product.name, qty),
            &ctx.price(line_total),
        );
    }
    ctx.output.kv("Total", &ctx.price(cart.total()));
}
