//! List categories with product counts.

use anyhow::Result;
use serde_json::json;
use shive_commerce::prelude::*;

use crate::context::Context;

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let counts = catalog.category_counts();

    if ctx.output.is_json() {
        let categories: Vec<_> = counts
            .iter()
            .map(|(category, count)| json!({ "category": category, "count": count }))
            .collect();
        ctx.output.json(&json!({ "total": catalog.len(), "categories": categories }));
        return Ok(());
    }

    ctx.output.header(&format!("{} categories", ctx.config.store.name));
    let total = catalog.len().to_string();
    ctx.output.table_row(&[ALL_CATEGORIES, total.as_str()], &[12]);
    for (category, count) in &counts {
        let count = count.to_string();
        ctx.output.table_row(&[category.as_str(), count.as_str()], &[12]);
    }

    Ok(())
}
