//! Stock level records.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Available quantity for a product, as reported by the inventory service.
///
/// The service is the source of truth; the cart only ever compares against
/// the value observed during its own validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockRecord {
    /// Product ID.
    pub id: ProductId,
    /// Units available.
    pub amount: i64,
}

impl StockRecord {
    /// Create a new stock record.
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self { id, amount }
    }

    /// Check if a specific quantity can be served from this stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.amount
    }
}
