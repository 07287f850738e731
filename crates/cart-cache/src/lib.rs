//! Durable key-value cache for the storefront cart.
//!
//! Provides a simple, ergonomic API for keeping data in a key-value store
//! with automatic JSON serialization, plus the cart's [`CartStorage`]
//! adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_cache::{Cache, CartCache};
//!
//! // Entries live in one file per key under `.cart/`
//! let cache = Cache::open(".cart")?;
//! let storage = CartCache::new(cache);
//!
//! let items = storage.load()?.unwrap_or_default();
//! ```
//!
//! [`CartStorage`]: cart_core::CartStorage

mod cart;
mod error;
mod kv;
mod store;

pub use cart::{CartCache, DEFAULT_CART_KEY};
pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, CartCache, FileStore, KvStore, MemoryStore};
}
