//! Storefront configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shive_observability::LoggingConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shive.toml", ".shive.toml", "shive.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Store presentation.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Store presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Prefix printed before prices. No conversion is applied.
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
}

fn default_store_name() -> String {
    "S-Hive".to_string()
}

fn default_currency_label() -> String {
    "RS".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency_label: default_currency_label(),
        }
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (`.json` or `.toml`). The built-in catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Generate a default shive.toml config file.
pub fn generate_default_config() -> String {
    r#"# S-Hive storefront configuration

[store]
name = "S-Hive"
# Printed before prices; amounts are not converted.
currency_label = "RS"

[catalog]
# Load products from a file instead of the built-in catalog.
# path = "catalog.json"

[logging]
# trace, debug, info, warn or error. SHIVE_LOG overrides this.
level = "warn"
# human or json
format = "human"
"#
    .to_string()
}
