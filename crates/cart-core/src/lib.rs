//! Shopping cart state manager for a storefront.
//!
//! This crate tracks the products a shopper selected, validates quantities
//! against a remote inventory, and persists the cart after every change:
//!
//! - **Catalog**: product metadata and stock records served by the inventory
//! - **Cart**: an immutable, ordered cart value and its line items
//! - **Ports**: the `Inventory`, `CartStorage` and `Notifier` capabilities
//! - **Manager**: `CartManager`, the only way to change the cart
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_core::prelude::*;
//!
//! let manager = CartManager::load(inventory, storage, notifier, CartOptions::default())?;
//!
//! manager.add_product(ProductId::new(1)).await;
//! manager
//!     .update_product_amount(UpdateProductAmount {
//!         product_id: ProductId::new(1),
//!         amount: 3,
//!     })
//!     .await;
//! manager.remove_product(ProductId::new(1));
//!
//! println!("{} items", manager.cart().item_count());
//! ```

pub mod error;
pub mod ids;
pub mod messages;
pub mod ports;

pub mod cart;
pub mod catalog;
pub mod manager;

pub use error::{CartError, InventoryError, StorageError};
pub use ids::ProductId;
pub use messages::{CartMessage, Locale, Severity};
pub use ports::{CartStorage, Inventory, Notifier};

pub use cart::{format_price, Cart, CartItem};
pub use catalog::{Product, StockRecord};
pub use manager::{CartManager, CartOptions, CorruptStatePolicy, UpdateProductAmount};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, InventoryError, StorageError};
    pub use crate::ids::ProductId;
    pub use crate::messages::{CartMessage, Locale, Severity};
    pub use crate::ports::{CartStorage, Inventory, Notifier};

    // Cart
    pub use crate::cart::{format_price, Cart, CartItem};

    // Catalog
    pub use crate::catalog::{Product, StockRecord};

    // Manager
    pub use crate::manager::{CartManager, CartOptions, CorruptStatePolicy, UpdateProductAmount};
}
