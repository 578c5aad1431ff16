//! Search the catalog.

use anyhow::Result;
use serde_json::json;
use shive_commerce::prelude::*;

use super::{print_products, SearchArgs};
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let outcome = submit_search(&catalog, &args.phrase())?;

    match outcome {
        SearchOutcome::NoResults { term } => {
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "term": term, "results": [] }));
            } else {
                ctx.output
                    .warn(&format!("No products found matching \"{}\"", term));
            }
        }
        SearchOutcome::Found(handoff) => {
            if ctx.output.is_json() {
                ctx.output.json(&handoff);
                return Ok(());
            }

            // Open the shop page on the staged results, as the navigation bar does.
            let mut slot = HandoffSlot::new();
            let location = ShopLocation::for_search(handoff.term.clone());
            slot.stage(handoff);
            let view = ShopView::open(&catalog, &ShopLocation::shop(), &mut slot);

            ctx.output.header(&view.title());
            ctx.output.info(&view.subtitle(&catalog));
            ctx.output.debug(&format!("Shop page: {}", location));
            print_products(ctx, &view.display_products(&catalog), &view.highlighted(&catalog));
        }
    }

    Ok(())
}
