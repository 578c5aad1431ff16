//! Shive CLI - Command line storefront for the S-Hive catalog.
//!
//! Commands:
//! - `shive categories` - List categories with product counts
//! - `shive browse` - List products, optionally by category
//! - `shive search` - Search the catalog
//! - `shive shop` - Interactive shopping session with a cart
//! - `shive config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, ConfigArgs, SearchArgs};

/// Shive CLI - Browse, search and shop the S-Hive catalog
#[derive(Parser)]
#[command(name = "shive")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories with product counts
    Categories,

    /// List products, optionally filtered by category
    Browse(BrowseArgs),

    /// Search products by name, brand, category or description
    Search(SearchArgs),

    /// Start an interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = shive_observability::init_logging(&logging) {
        ctx.output.debug(&e.to_string());
    }

    if let Some(path) = &ctx.config_path {
        ctx.output.debug(&format!("Using config: {}", path.display()));
    }

    // Execute command
    let result = match cli.command {
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Shop => commands::shop::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
