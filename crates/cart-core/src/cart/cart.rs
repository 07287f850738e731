//! Cart and cart item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A product line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (unique within a cart).
    pub id: ProductId,
    /// Product name (denormalized for display).
    #[serde(alias = "title")]
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    #[serde(alias = "image")]
    pub image_url: String,
    /// Selected quantity, always at least 1.
    pub amount: i64,
}

impl CartItem {
    /// Create a cart item from catalog metadata.
    pub fn from_product(product: Product, amount: i64) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            amount,
        }
    }

    /// Unit price times amount.
    pub fn subtotal(&self) -> f64 {
        self.price * self.amount as f64
    }
}

/// An immutable, ordered sequence of cart items.
///
/// Items keep the order in which they were first added. A `Cart` is never
/// modified after construction: the `with_*`/`without` methods build a new
/// value and leave `self` untouched. Clones share the same allocation, so
/// [`Cart::same_as`] tells whether two values are the same publication.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Arc<[CartItem]>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by product ID.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Selected amount for a product, 0 when absent.
    pub fn amount_of(&self, id: ProductId) -> i64 {
        self.get(id).map(|i| i.amount).unwrap_or(0)
    }

    /// Selected amount per product.
    pub fn amounts(&self) -> BTreeMap<ProductId, i64> {
        self.items.iter().map(|i| (i.id, i.amount)).collect()
    }

    /// Total item count (sum of amounts).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Whether both values are the same publication (pointer equality).
    pub fn same_as(&self, other: &Cart) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Copy the items into an owned vector.
    pub fn to_vec(&self) -> Vec<CartItem> {
        self.items.to_vec()
    }

    /// New cart with `item` appended at the end.
    ///
    /// The caller is responsible for the item not being present already.
    pub fn with_item(&self, item: CartItem) -> Cart {
        let mut items = self.to_vec();
        items.push(item);
        Cart::from(items)
    }

    /// New cart with the amount of product `id` replaced.
    ///
    /// Returns `None` if the product is not in the cart.
    pub fn with_amount(&self, id: ProductId, amount: i64) -> Option<Cart> {
        let index = self.items.iter().position(|i| i.id == id)?;
        let mut items = self.to_vec();
        items[index].amount = amount;
        Some(Cart::from(items))
    }

    /// New cart with product `id` removed.
    ///
    /// Returns `None` if the product is not in the cart.
    pub fn without(&self, id: ProductId) -> Option<Cart> {
        let index = self.items.iter().position(|i| i.id == id)?;
        let mut items = self.to_vec();
        items.remove(index);
        Some(Cart::from(items))
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<CartItem>::deserialize(deserializer).map(Cart::from)
    }
}
