//! Inventory service over HTTP.

use crate::client::FetchClient;
use crate::FetchError;
use async_trait::async_trait;
use cart_core::{Inventory, InventoryError, Product, ProductId, StockRecord};

/// [`Inventory`] backed by the storefront API.
///
/// Reads `GET /stock/{id}` and `GET /products/{id}` relative to the
/// client's base URL.
#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: FetchClient,
}

impl HttpInventory {
    /// Create an inventory on top of a configured client.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Get the underlying client.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }
}

#[async_trait]
impl Inventory for HttpInventory {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, InventoryError> {
        self.client
            .get_json(&format!("/stock/{}", id))
            .await
            .map_err(|e| inventory_error(id, e))
    }

    async fn product(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.client
            .get_json(&format!("/products/{}", id))
            .await
            .map_err(|e| inventory_error(id, e))
    }
}

fn inventory_error(id: ProductId, e: FetchError) -> InventoryError {
    match e {
        FetchError::Http { status: 404, .. } => InventoryError::NotFound(id),
        FetchError::Deserialization(msg) => InventoryError::Malformed(msg),
        other => InventoryError::Unavailable(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let id = ProductId::new(3);
        let not_found = FetchError::Http {
            status: 404,
            url: "http://localhost/stock/3".to_string(),
        };
        assert!(matches!(inventory_error(id, not_found), InventoryError::NotFound(p) if p == id));

        let server = FetchError::Http {
            status: 502,
            url: "http://localhost/stock/3".to_string(),
        };
        assert!(matches!(inventory_error(id, server), InventoryError::Unavailable(_)));

        let body = FetchError::Deserialization("missing field `amount`".to_string());
        assert!(matches!(inventory_error(id, body), InventoryError::Malformed(_)));
    }
}
