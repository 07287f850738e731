//! Capabilities the cart manager depends on.
//!
//! The manager never talks to HTTP, storage, or a UI directly; it is built
//! from one implementation of each trait below.

use crate::cart::{Cart, CartItem};
use crate::catalog::{Product, StockRecord};
use crate::error::{InventoryError, StorageError};
use crate::ids::ProductId;
use crate::messages::Severity;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote inventory: stock levels and product metadata.
#[async_trait]
pub trait Inventory: Send + Sync {
    /// Get the current stock for a product.
    async fn stock(&self, id: ProductId) -> Result<StockRecord, InventoryError>;

    /// Get catalog metadata for a product.
    async fn product(&self, id: ProductId) -> Result<Product, InventoryError>;
}

/// Durable client-side storage for the cart.
pub trait CartStorage: Send + Sync {
    /// Load the stored cart.
    ///
    /// Returns `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError>;

    /// Store the cart, replacing any previous value.
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

/// One-way, user-facing message surface.
pub trait Notifier: Send + Sync {
    /// Show a message to the user.
    fn notify(&self, message: &str, severity: Severity);

    /// Show an error message.
    fn error(&self, message: &str) {
        self.notify(message, Severity::Error);
    }
}

#[async_trait]
impl<T: Inventory + ?Sized> Inventory for Arc<T> {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, InventoryError> {
        (**self).stock(id).await
    }

    async fn product(&self, id: ProductId) -> Result<Product, InventoryError> {
        (**self).product(id).await
    }
}

impl<T: CartStorage + ?Sized> CartStorage for Arc<T> {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        (**self).save(cart)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}
