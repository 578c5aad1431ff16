//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shive_commerce::prelude::*;
use tracing::debug;

use crate::config::{StorefrontConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one found
    /// walking up from the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (StorefrontConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (StorefrontConfig::load(&path)?, Some(path)),
                None => (StorefrontConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Load the catalog named in the config, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        let catalog = match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_catalog_path(path);
                debug!(path = %path.display(), "loading catalog file");
                FileCatalog::new(path).load()?
            }
            None => BuiltinCatalog.load()?,
        };
        Ok(catalog)
    }

    /// Format a price with the configured currency label.
    pub fn price(&self, price: Price) -> String {
        price.display(&self.config.store.currency_label)
    }

    /// Catalog paths are relative to the config file, or the working
    /// directory when no file was found.
    fn resolve_catalog_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(self.cwd.as_path());
        base.join(path)
    }
}

/// Find the nearest config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(config: StorefrontConfig, config_path: Option<PathBuf>, cwd: &Path) -> Context {
        Context {
            config,
            config_path,
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".shive.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.path().join(".shive.toml")));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("shive.json"), "{}").unwrap();
        std::fs::write(root.path().join("shive.toml"), "").unwrap();

        assert_eq!(find_config(root.path()), Some(root.path().join("shive.toml")));
    }

    #[test]
    fn test_builtin_catalog_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_with(StorefrontConfig::default(), None, dir.path());
        assert_eq!(ctx.catalog().unwrap().len(), 27);
        assert_eq!(ctx.price(Price::new(2999)), "RS 2999");
    }

    #[test]
    fn test_catalog_path_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("products.json"),
            r#"[{"id": 7, "name": "Trail Shoe", "price": 4500, "category": "Shoes"}]"#,
        )
        .unwrap();

        let mut config = StorefrontConfig::default();
        config.catalog.path = Some("products.json".to_string());
        let elsewhere = tempfile::tempdir().unwrap();
        let ctx = context_with(config, Some(dir.path().join("shive.toml")), elsewhere.path());

        let catalog = ctx.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].name, "Trail Shoe");
    }

    #[test]
    fn test_missing_catalog_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.catalog.path = Some("nope.json".to_string());
        let ctx = context_with(config, None, dir.path());
        assert!(ctx.catalog().is_err());
    }
}
