//! The cart state container.
//!
//! `CartManager` owns the current [`Cart`] and is the only way to change
//! it. Every operation reads a snapshot first, validates against the
//! inventory, and publishes a freshly built cart on success. Failures are
//! reported through the [`Notifier`] and never returned to the caller.
//!
//! Overlapping operations each start from the snapshot they read before
//! their first await, so the last one to publish wins.

use crate::cart::{Cart, CartItem};
use crate::catalog::StockRecord;
use crate::error::{CartError, InventoryError};
use crate::ids::ProductId;
use crate::messages::{CartMessage, Locale};
use crate::ports::{CartStorage, Inventory, Notifier};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, error, warn};

/// What to do when the stored cart cannot be parsed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptStatePolicy {
    /// Fail construction with [`CartError::MalformedState`].
    #[default]
    Fail,
    /// Log a warning and start with an empty cart.
    Reset,
}

/// Construction options for [`CartManager`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CartOptions {
    /// Language of user notifications.
    pub locale: Locale,
    /// Handling of an unreadable stored cart.
    pub on_corrupt_state: CorruptStatePolicy,
}

/// Arguments of [`CartManager::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    /// Product to change.
    pub product_id: ProductId,
    /// New quantity.
    pub amount: i64,
}

/// Cart state manager.
pub struct CartManager<I, S, N> {
    inventory: I,
    storage: S,
    notifier: N,
    locale: Locale,
    state: watch::Sender<Cart>,
}

impl<I, S, N> CartManager<I, S, N>
where
    I: Inventory,
    S: CartStorage,
    N: Notifier,
{
    /// Build a manager, loading the initial cart from storage.
    ///
    /// An absent stored value yields an empty cart. The stored items are
    /// taken as they are, without re-validating stock.
    pub fn load(
        inventory: I,
        storage: S,
        notifier: N,
        options: CartOptions,
    ) -> Result<Self, CartError> {
        let initial = match storage.load() {
            Ok(Some(items)) => Cart::from(items),
            Ok(None) => Cart::new(),
            Err(e) => match (CartError::from(e), options.on_corrupt_state) {
                (CartError::MalformedState(reason), CorruptStatePolicy::Reset) => {
                    warn!(%reason, "stored cart is malformed, starting empty");
                    Cart::new()
                }
                (err, _) => return Err(err),
            },
        };

        debug!(items = initial.len(), "cart loaded");
        let (state, _) = watch::channel(initial);

        Ok(Self {
            inventory,
            storage,
            notifier,
            locale: options.locale,
            state,
        })
    }

    /// Current cart.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Receive every published cart, starting from the current one.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Notification language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Add one unit of a product.
    ///
    /// A product not yet in the cart is fetched from the catalog and
    /// appended with amount 1.
    pub async fn add_product(&self, product_id: ProductId) {
        if let Err(err) = self.try_add_product(product_id).await {
            self.report(product_id, &err, CartMessage::AddFailed);
        }
    }

    /// Remove a product line.
    pub fn remove_product(&self, product_id: ProductId) {
        if let Err(err) = self.try_remove_product(product_id) {
            self.report(product_id, &err, CartMessage::RemoveFailed);
        }
    }

    /// Set a product's amount.
    ///
    /// Non-positive amounts are ignored without contacting the inventory;
    /// removal goes through [`remove_product`](Self::remove_product).
    pub async fn update_product_amount(&self, update: UpdateProductAmount) {
        if update.amount <= 0 {
            return;
        }

        if let Err(err) = self.try_update_product_amount(update).await {
            self.report(update.product_id, &err, CartMessage::UpdateFailed);
        }
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let snapshot = self.cart();
        let existing = snapshot.get(product_id).map(|item| item.amount);

        let stock = self.inventory.stock(product_id).await?;
        let desired = existing.unwrap_or(0).saturating_add(1);
        ensure_in_stock(product_id, desired, &stock)?;

        let next = match existing {
            Some(_) => snapshot
                .with_amount(product_id, desired)
                .ok_or(CartError::NotInCart(product_id))?,
            None => {
                let product = self.inventory.product(product_id).await?;
                if product.id != product_id {
                    return Err(InventoryError::Malformed(format!(
                        "requested product {} but catalog returned {}",
                        product_id, product.id
                    ))
                    .into());
                }
                snapshot.with_item(CartItem::from_product(product, 1))
            }
        };

        debug!(%product_id, amount = desired, "product added");
        self.publish(next);
        Ok(())
    }

    fn try_remove_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let next = self
            .cart()
            .without(product_id)
            .ok_or(CartError::NotInCart(product_id))?;

        debug!(%product_id, "product removed");
        self.publish(next);
        Ok(())
    }

    async fn try_update_product_amount(
        &self,
        UpdateProductAmount { product_id, amount }: UpdateProductAmount,
    ) -> Result<(), CartError> {
        let snapshot = self.cart();

        let stock = self.inventory.stock(product_id).await?;
        // Checked as one unit above the target, the same shape as adding.
        ensure_in_stock(product_id, amount.saturating_add(1), &stock)?;

        let next = snapshot
            .with_amount(product_id, amount)
            .ok_or(CartError::NotInCart(product_id))?;

        debug!(%product_id, amount, "product amount updated");
        self.publish(next);
        Ok(())
    }

    /// Replace the current cart and persist it if it changed.
    fn publish(&self, next: Cart) {
        let previous = self.state.send_replace(next.clone());
        if previous.same_as(&next) {
            return;
        }

        match self.storage.save(&next) {
            Ok(()) => debug!(items = next.len(), "cart persisted"),
            Err(e) => error!(error = %e, "failed to persist cart"),
        }
    }

    fn report(&self, product_id: ProductId, err: &CartError, fallback: CartMessage) {
        let message = match err {
            CartError::StockExceeded {
                requested,
                available,
                ..
            } => {
                warn!(%product_id, requested, available, "requested quantity exceeds stock");
                CartMessage::StockExceeded
            }
            CartError::NotInCart(_) => {
                warn!(%product_id, "product not in cart");
                fallback
            }
            other => {
                error!(%product_id, error = %other, "cart operation failed");
                fallback
            }
        };

        self.notifier.error(message.text(self.locale));
    }
}

fn ensure_in_stock(
    product_id: ProductId,
    requested: i64,
    stock: &StockRecord,
) -> Result<(), CartError> {
    if stock.can_fulfill(requested) {
        Ok(())
    } else {
        Err(CartError::StockExceeded {
            product_id,
            requested,
            available: stock.amount,
        })
    }
}
