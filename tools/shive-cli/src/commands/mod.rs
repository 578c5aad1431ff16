//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod config;
pub mod search;
pub mod shop;

use clap::{Args, Subcommand};
use console::style;
use shive_commerce::prelude::*;

use crate::context::Context;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to list (exact name, e.g. `Beauty`).
    #[arg(long, default_value = ALL_CATEGORIES)]
    pub category: String,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search term. Multiple words are searched as one phrase.
    #[arg(required = true, num_args = 1..)]
    pub term: Vec<String>,
}

impl SearchArgs {
    /// The term as typed, words joined by single spaces.
    pub fn phrase(&self) -> String {
        self.term.join(" ")
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

const COLUMN_WIDTHS: [usize; 5] = [4, 28, 12, 12, 10];

/// Print a product listing as a table, marking highlighted names.
pub(crate) fn print_products(ctx: &Context, products: &[Product], highlighted: &[ProductId]) {
    ctx.output
        .table_row(&["ID", "Name", "Brand", "Category", "Price"], &COLUMN_WIDTHS);

    for product in products {
        let id = product.id.to_string();
        let name = if highlighted.contains(&product.id) {
            // Pad before styling; escape codes would throw off the width.
            let padded = format!("{:width$}", product.name, width = COLUMN_WIDTHS[1]);
            style(padded).bold().yellow().to_string()
        } else {
            product.name.clone()
        };
        let price = ctx.price(product.price);
        let stars = product.rating_stars();

        ctx.output.table_row(
            &[
                id.as_str(),
                name.as_str(),
                product.brand.as_str(),
                product.category.as_str(),
                price.as_str(),
                stars.as_str(),
            ],
            &COLUMN_WIDTHS,
        );
    }
}
