//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// Filesystem error from a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CacheError> for cart_core::StorageError {
    fn from(e: CacheError) -> Self {
        match e {
            CacheError::SerializeError(e) => cart_core::StorageError::Malformed(e.to_string()),
            other => cart_core::StorageError::Backend(other.to_string()),
        }
    }
}
