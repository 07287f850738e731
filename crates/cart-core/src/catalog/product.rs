//! Product metadata.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Catalog metadata for a product.
///
/// Fetched once, when the product first enters the cart. The catalog API
/// historically served `title` and `image`; both spellings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    #[serde(alias = "title")]
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    #[serde(alias = "image")]
    pub image_url: String,
}

impl Product {
    /// Create a new product record.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }
}
