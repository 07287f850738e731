//! Cart persistence on top of the cache.

use crate::kv::Cache;
use crate::store::KvStore;
use cart_core::{Cart, CartItem, CartStorage, StorageError};
use tracing::debug;

/// Default key under which the cart is stored.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// [`CartStorage`] keeping the cart as a JSON array under one key.
///
/// The stored value is read back as-is; a value that does not parse as a
/// list of cart items is reported as [`StorageError::Malformed`].
#[derive(Debug)]
pub struct CartCache<S> {
    cache: Cache<S>,
    key: String,
}

impl<S: KvStore> CartCache<S> {
    /// Store the cart under [`DEFAULT_CART_KEY`].
    pub fn new(cache: Cache<S>) -> Self {
        Self::with_key(cache, DEFAULT_CART_KEY)
    }

    /// Store the cart under a custom key.
    pub fn with_key(cache: Cache<S>, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    /// Key holding the cart.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Forget the stored cart.
    pub fn clear(&self) -> Result<(), StorageError> {
        Ok(self.cache.delete(&self.key)?)
    }
}

impl<S: KvStore> CartStorage for CartCache<S> {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        let items = self.cache.get::<Vec<CartItem>>(&self.key)?;
        debug!(key = %self.key, found = items.is_some(), "cart read from cache");
        Ok(items)
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        self.cache.set(&self.key, cart)?;
        debug!(key = %self.key, items = cart.len(), "cart written to cache");
        Ok(())
    }
}
