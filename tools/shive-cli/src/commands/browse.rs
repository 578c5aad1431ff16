//! List products by category.

use anyhow::Result;
use serde_json::json;
use shive_commerce::prelude::*;

use super::{print_products, BrowseArgs};
use crate::context::Context;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let mut view = ShopView::new();
    view.select_category(args.category.as_str());
    let products = view.display_products(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "category": view.selected_category(),
            "products": products,
        }));
        return Ok(());
    }

    if args.category != ALL_CATEGORIES && args.category.parse::<Category>().is_err() {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        ctx.output.warn(&format!(
            "Unknown category '{}'. Categories are matched exactly: {}",
            args.category,
            known.join(", ")
        ));
    }

    ctx.output.header(&view.title());
    ctx.output.info(&view.subtitle(&catalog));
    if !products.is_empty() {
        print_products(ctx, &products, &[]);
    }

    Ok(())
}
