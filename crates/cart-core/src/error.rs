//! Cart error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur while validating or applying a cart operation.
///
/// Operations on [`CartManager`](crate::CartManager) never return these to
/// the caller; they are turned into a single user notification at the
/// operation boundary. Loading the cart is the exception and propagates
/// them.
#[derive(Error, Debug)]
pub enum CartError {
    /// Requested quantity is above the available stock.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// The operation targets a product that is not in the cart.
    #[error("Item not in cart: {0}")]
    NotInCart(ProductId),

    /// The inventory service failed or returned unusable data.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// The persisted cart could not be parsed.
    #[error("Malformed persisted cart: {0}")]
    MalformedState(String),

    /// The durable cache failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors reported by an [`Inventory`](crate::Inventory) implementation.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The service has no record for this product.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The service could not be reached or answered with an error.
    #[error("Inventory service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with data that does not fit the contract.
    #[error("Malformed inventory response: {0}")]
    Malformed(String),
}

/// Errors reported by a [`CartStorage`](crate::CartStorage) implementation.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The stored value exists but is not a valid cart.
    #[error("Malformed stored cart: {0}")]
    Malformed(String),

    /// The backing store failed.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<StorageError> for CartError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Malformed(msg) => CartError::MalformedState(msg),
            StorageError::Backend(msg) => CartError::Storage(msg),
        }
    }
}
