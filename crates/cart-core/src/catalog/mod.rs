//! Product catalog module.
//!
//! Read-only records served by the inventory service: product metadata
//! and per-product stock levels.

mod inventory;
mod product;

pub use inventory::StockRecord;
pub use product::Product;
