//! Inventory service client for the storefront cart.
//!
//! This crate provides:
//! - `FetchClient` - JSON GET client with timeout and retry
//! - `FetchPolicy` / `RetryPolicy` / `TimeoutConfig` - request policies
//! - `HttpInventory` - the cart's `Inventory` over `/stock` and `/products`
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_data::{FetchClient, HttpInventory};
//!
//! let client = FetchClient::new("http://localhost:3333")?;
//! let inventory = HttpInventory::new(client);
//!
//! let stock = inventory.stock(ProductId::new(1)).await?;
//! ```

mod client;
mod error;
mod inventory;
mod retry;

pub use client::FetchClient;
pub use error::FetchError;
pub use inventory::HttpInventory;
pub use retry::{BackoffStrategy, FetchPolicy, RetryCondition, RetryPolicy, TimeoutConfig};
