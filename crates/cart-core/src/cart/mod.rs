//! Shopping cart module.
//!
//! Contains the cart value type, its line items, and price formatting.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::format_price;
