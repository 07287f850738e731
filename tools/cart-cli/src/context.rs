//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use cart_cache::{Cache, CartCache, FileStore};
use cart_core::CartManager;
use cart_data::{FetchClient, HttpInventory};
use tracing::debug;

use crate::config::{CartConfig, CONFIG_NAMES};
use crate::notifier::ConsoleNotifier;
use crate::output::Output;

/// Cart manager wired to the CLI's adapters.
pub type CliCartManager = CartManager<HttpInventory, CartCache<FileStore>, Arc<ConsoleNotifier>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CartConfig,
    /// Where the configuration was read from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CartConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some(path) => (CartConfig::load(&path)?, Some(path)),
                None => (CartConfig::default(), None),
            }
        };

        match &config_path {
            Some(path) => debug!(path = %path.display(), "config loaded"),
            None => debug!("no config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Directory of the durable cart store.
    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    /// Durable cart storage as configured.
    pub fn cart_storage(&self) -> Result<CartCache<FileStore>> {
        let dir = self.storage_dir();
        let cache = Cache::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        Ok(CartCache::with_key(cache, self.config.storage.key.clone()))
    }

    /// Build the cart manager, loading the stored cart.
    pub fn cart_manager(&self) -> Result<CliCartManager> {
        let client = FetchClient::with_policy(&self.config.api.base_url, self.config.fetch_policy())
            .context("Invalid storefront API configuration")?;
        let notifier = Arc::new(ConsoleNotifier::new(self.output.is_json()));

        debug!(
            base_url = %self.config.api.base_url,
            storage = %self.storage_dir().display(),
            key = %self.config.storage.key,
            "wiring cart manager"
        );

        CartManager::load(
            HttpInventory::new(client),
            self.cart_storage()?,
            notifier,
            self.config.cart_options(),
        )
        .context("Failed to load the stored cart")
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
