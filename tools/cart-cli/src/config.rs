//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use cart_core::{CartOptions, CorruptStatePolicy, Locale};
use cart_data::{FetchPolicy, RetryPolicy, TimeoutConfig};
use serde::{Deserialize, Serialize};

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Storefront API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Durable cart storage.
    #[serde(default)]
    pub storage: StorageConfig,

    /// User-facing presentation.
    #[serde(default)]
    pub ui: UiConfig,
}

impl CartConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Request policy for the inventory client.
    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy::new(
            TimeoutConfig::from_total(Duration::from_millis(self.api.timeout_ms)),
            RetryPolicy::new(self.api.max_retries),
        )
    }

    /// Construction options for the cart manager.
    pub fn cart_options(&self) -> CartOptions {
        CartOptions {
            locale: self.ui.locale,
            on_corrupt_state: self.storage.on_corrupt_state,
        }
    }
}

/// Storefront API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL serving `/stock/{id}` and `/products/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after a failed request.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_retries() -> u32 {
    2
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

/// Durable storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the stored entries, relative to the working directory.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key under which the cart is stored.
    #[serde(default = "default_key")]
    pub key: String,

    /// What to do with a stored cart that cannot be parsed.
    #[serde(default)]
    pub on_corrupt_state: CorruptStatePolicy,
}

fn default_storage_dir() -> String {
    ".cart".to_string()
}

fn default_key() -> String {
    cart_cache::DEFAULT_CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_key(),
            on_corrupt_state: CorruptStatePolicy::default(),
        }
    }
}

/// Presentation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language of messages and prices.
    #[serde(default)]
    pub locale: Locale,
}

/// Generate a default cart.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront cart configuration

[api]
base_url = "http://localhost:3333"
timeout_ms = 5000
max_retries = 2

[storage]
dir = ".cart"
key = "@RocketShoes:cart"
# "fail" stops on an unreadable stored cart, "reset" starts empty
on_corrupt_state = "fail"

[ui]
# "pt-BR" or "en"
locale = "pt-BR"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: CartConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, CartConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let parsed: CartConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://api.rocketshoes.dev"

            [storage]
            on_corrupt_state = "reset"

            [ui]
            locale = "en"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.api.base_url, "https://api.rocketshoes.dev");
        assert_eq!(parsed.api.timeout_ms, 5000);
        assert_eq!(parsed.storage.key, "@RocketShoes:cart");
        assert_eq!(parsed.cart_options().on_corrupt_state, CorruptStatePolicy::Reset);
        assert_eq!(parsed.cart_options().locale, Locale::En);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, r#"{"api": {"max_retries": 0}}"#).unwrap();

        let config = CartConfig::load(&path).unwrap();
        assert_eq!(config.fetch_policy().retry.max_retries, 0);
    }
}
