//! Behavioural tests for `CartManager` against in-memory ports.

use async_trait::async_trait;
use cart_core::prelude::*;
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeInventory {
    stock: Mutex<HashMap<ProductId, i64>>,
    products: Mutex<HashMap<ProductId, Product>>,
    stock_calls: AtomicUsize,
    product_calls: AtomicUsize,
    yield_first: bool,
}

impl FakeInventory {
    fn with_product(self, id: u64, name: &str, price: f64, stock: i64) -> Self {
        let id = ProductId::new(id);
        self.stock.lock().unwrap().insert(id, stock);
        self.products
            .lock()
            .unwrap()
            .insert(id, Product::new(id, name, price, "x"));
        self
    }

    fn with_stock(self, id: u64, stock: i64) -> Self {
        self.stock.lock().unwrap().insert(ProductId::new(id), stock);
        self
    }

    fn stock_calls(&self) -> usize {
        self.stock_calls.load(Ordering::SeqCst)
    }

    fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Inventory for FakeInventory {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, InventoryError> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        if self.yield_first {
            tokio::task::yield_now().await;
        }
        let amount = self.stock.lock().unwrap().get(&id).copied();
        amount
            .map(|amount| StockRecord::new(id, amount))
            .ok_or(InventoryError::NotFound(id))
    }

    async fn product(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        let product = self.products.lock().unwrap().get(&id).cloned();
        product.ok_or_else(|| InventoryError::Unavailable("connection refused".to_string()))
    }
}

#[derive(Default)]
struct MemoryStorage {
    value: Mutex<Option<Vec<CartItem>>>,
    saves: AtomicUsize,
}

impl MemoryStorage {
    fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            value: Mutex::new(Some(items)),
            saves: AtomicUsize::new(0),
        }
    }

    fn stored(&self) -> Option<Vec<CartItem>> {
        self.value.lock().unwrap().clone()
    }

    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        Ok(self.stored())
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.value.lock().unwrap() = Some(cart.to_vec());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    fn texts(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(m, _)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

type Manager = CartManager<Arc<FakeInventory>, Arc<MemoryStorage>, Arc<RecordingNotifier>>;

struct Harness {
    manager: Manager,
    inventory: Arc<FakeInventory>,
    storage: Arc<MemoryStorage>,
    notifier: Arc<RecordingNotifier>,
}

fn harness(inventory: FakeInventory, storage: MemoryStorage) -> Harness {
    let inventory = Arc::new(inventory);
    let storage = Arc::new(storage);
    let notifier = Arc::new(RecordingNotifier::default());
    let options = CartOptions {
        locale: Locale::En,
        ..CartOptions::default()
    };
    let manager = CartManager::load(
        inventory.clone(),
        storage.clone(),
        notifier.clone(),
        options,
    )
    .unwrap();

    Harness {
        manager,
        inventory,
        storage,
        notifier,
    }
}

fn item(id: u64, amount: i64) -> CartItem {
    CartItem {
        id: ProductId::new(id),
        name: format!("Product {}", id),
        price: 50.0,
        image_url: "x".to_string(),
        amount,
    }
}

fn update(id: u64, amount: i64) -> UpdateProductAmount {
    UpdateProductAmount {
        product_id: ProductId::new(id),
        amount,
    }
}

#[tokio::test]
async fn test_add_new_product_fetches_metadata() {
    let h = harness(
        FakeInventory::default().with_product(1, "Shoe", 100.0, 5),
        MemoryStorage::default(),
    );

    h.manager.add_product(ProductId::new(1)).await;

    let expected = vec![CartItem {
        id: ProductId::new(1),
        name: "Shoe".to_string(),
        price: 100.0,
        image_url: "x".to_string(),
        amount: 1,
    }];
    assert_eq!(h.manager.cart().to_vec(), expected);
    assert_eq!(h.storage.stored(), Some(expected));
    assert!(h.notifier.texts().is_empty());
}

#[tokio::test]
async fn test_add_existing_product_increments_without_refetch() {
    let h = harness(
        FakeInventory::default().with_stock(1, 5),
        MemoryStorage::with_items(vec![item(1, 2)]),
    );

    h.manager.add_product(ProductId::new(1)).await;

    assert_eq!(h.manager.cart().amount_of(ProductId::new(1)), 3);
    assert_eq!(h.inventory.product_calls(), 0);
    assert_eq!(h.storage.saves(), 1);
}

#[tokio::test]
async fn test_add_appends_at_end() {
    let h = harness(
        FakeInventory::default().with_product(7, "Boot", 250.0, 1),
        MemoryStorage::with_items(vec![item(3, 1)]),
    );

    h.manager.add_product(ProductId::new(7)).await;

    let ids: Vec<u64> = h.manager.cart().iter().map(|i| i.id.get()).collect();
    assert_eq!(ids, vec![3, 7]);
}

#[tokio::test]
async fn test_add_beyond_stock_is_rejected() {
    let h = harness(
        FakeInventory::default().with_stock(1, 1),
        MemoryStorage::with_items(vec![item(1, 1)]),
    );
    let before = h.manager.cart();

    h.manager.add_product(ProductId::new(1)).await;

    assert!(h.manager.cart().same_as(&before));
    assert_eq!(
        h.notifier.texts(),
        vec!["Requested quantity unavailable in stock".to_string()]
    );
    assert_eq!(h.storage.saves(), 0);
}

#[tokio::test]
async fn test_add_out_of_stock_new_product() {
    let h = harness(
        FakeInventory::default().with_product(1, "Shoe", 100.0, 0),
        MemoryStorage::default(),
    );

    h.manager.add_product(ProductId::new(1)).await;

    assert!(h.manager.cart().is_empty());
    assert_eq!(h.inventory.product_calls(), 0);
    assert_eq!(h.notifier.texts().len(), 1);
}

#[tokio::test]
async fn test_add_reports_inventory_failure() {
    let h = harness(FakeInventory::default(), MemoryStorage::default());

    h.manager.add_product(ProductId::new(42)).await;

    assert!(h.manager.cart().is_empty());
    assert_eq!(h.notifier.texts(), vec!["Failed to add product".to_string()]);
}

#[tokio::test]
async fn test_add_reports_catalog_failure() {
    // Stock known, but the product endpoint fails.
    let h = harness(
        FakeInventory::default().with_stock(9, 3),
        MemoryStorage::default(),
    );

    h.manager.add_product(ProductId::new(9)).await;

    assert!(h.manager.cart().is_empty());
    assert_eq!(h.inventory.product_calls(), 1);
    assert_eq!(h.notifier.texts(), vec!["Failed to add product".to_string()]);
}

#[test]
fn test_remove_product() {
    let h = harness(
        FakeInventory::default(),
        MemoryStorage::with_items(vec![item(2, 3)]),
    );

    h.manager.remove_product(ProductId::new(2));

    assert!(h.manager.cart().is_empty());
    assert_eq!(h.storage.stored(), Some(vec![]));
    assert!(h.notifier.texts().is_empty());
}

#[test]
fn test_remove_missing_product() {
    let h = harness(
        FakeInventory::default(),
        MemoryStorage::with_items(vec![item(3, 2)]),
    );
    let before = h.manager.cart();

    h.manager.remove_product(ProductId::new(99));

    let after = h.manager.cart();
    assert!(after.same_as(&before));
    assert_eq!(after.to_vec(), vec![item(3, 2)]);
    assert_eq!(h.notifier.texts(), vec!["Failed to remove product".to_string()]);
    assert_eq!(h.storage.saves(), 0);
}

#[tokio::test]
async fn test_update_amount() {
    let h = harness(
        FakeInventory::default().with_stock(4, 10),
        MemoryStorage::with_items(vec![item(4, 2)]),
    );

    h.manager.update_product_amount(update(4, 5)).await;

    assert_eq!(h.manager.cart().to_vec(), vec![item(4, 5)]);
    assert_eq!(h.storage.saves(), 1);
}

#[tokio::test]
async fn test_update_to_exact_stock_is_rejected() {
    // The check compares one unit above the target amount.
    let h = harness(
        FakeInventory::default().with_stock(4, 5),
        MemoryStorage::with_items(vec![item(4, 2)]),
    );

    h.manager.update_product_amount(update(4, 5)).await;
    assert_eq!(h.manager.cart().amount_of(ProductId::new(4)), 2);
    assert_eq!(
        h.notifier.texts(),
        vec!["Requested quantity unavailable in stock".to_string()]
    );

    h.manager.update_product_amount(update(4, 4)).await;
    assert_eq!(h.manager.cart().amount_of(ProductId::new(4)), 4);
}

#[tokio::test]
async fn test_update_non_positive_is_ignored() {
    let h = harness(
        FakeInventory::default().with_stock(5, 10),
        MemoryStorage::with_items(vec![item(5, 2)]),
    );
    let before = h.manager.cart();

    h.manager.update_product_amount(update(5, 0)).await;
    h.manager.update_product_amount(update(5, -3)).await;

    assert!(h.manager.cart().same_as(&before));
    assert_eq!(h.inventory.stock_calls(), 0);
    assert!(h.notifier.texts().is_empty());
    assert_eq!(h.storage.saves(), 0);
}

#[tokio::test]
async fn test_update_missing_product() {
    let h = harness(
        FakeInventory::default().with_stock(8, 10),
        MemoryStorage::with_items(vec![item(1, 1)]),
    );
    let before = h.manager.cart();

    h.manager.update_product_amount(update(8, 2)).await;

    assert!(h.manager.cart().same_as(&before));
    assert_eq!(h.inventory.stock_calls(), 1);
    assert_eq!(
        h.notifier.texts(),
        vec!["Failed to update product quantity".to_string()]
    );
}

#[tokio::test]
async fn test_portuguese_messages_by_default() {
    let notifier = Arc::new(RecordingNotifier::default());
    let manager = CartManager::load(
        Arc::new(FakeInventory::default()),
        Arc::new(MemoryStorage::default()),
        notifier.clone(),
        CartOptions::default(),
    )
    .unwrap();

    manager.remove_product(ProductId::new(1));
    manager.add_product(ProductId::new(1)).await;

    assert_eq!(
        notifier.texts(),
        vec![
            "Erro na remoção do produto".to_string(),
            "Erro na adição do produto".to_string()
        ]
    );
    assert!(notifier
        .messages
        .lock()
        .unwrap()
        .iter()
        .all(|(_, s)| *s == Severity::Error));
}

#[tokio::test]
async fn test_subscribers_see_published_carts() {
    let h = harness(
        FakeInventory::default().with_product(1, "Shoe", 100.0, 5),
        MemoryStorage::default(),
    );
    let mut rx = h.manager.subscribe();
    assert!(rx.borrow_and_update().is_empty());

    h.manager.add_product(ProductId::new(1)).await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().amount_of(ProductId::new(1)), 1);
}

#[tokio::test]
async fn test_overlapping_adds_last_writer_wins() {
    let inventory = FakeInventory {
        yield_first: true,
        ..FakeInventory::default()
    }
    .with_product(1, "Shoe", 100.0, 5);
    let h = harness(inventory, MemoryStorage::default());

    tokio::join!(
        h.manager.add_product(ProductId::new(1)),
        h.manager.add_product(ProductId::new(1)),
    );

    // Both started from the empty cart; the second publication overwrote the first.
    let cart = h.manager.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(ProductId::new(1)), 1);
    assert_eq!(h.storage.saves(), 2);
}

#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Remove(u64),
    Update(u64, i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..5).prop_map(Op::Add),
        (1u64..5).prop_map(Op::Remove),
        (1u64..5, -2i64..8).prop_map(|(id, amount)| Op::Update(id, amount)),
    ]
}

proptest! {
    #[test]
    fn prop_ids_unique_and_amounts_within_stock(
        stocks in proptest::collection::vec(0i64..6, 4),
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut inventory = FakeInventory::default();
        for (i, stock) in stocks.iter().enumerate() {
            inventory = inventory.with_product(i as u64 + 1, "Shoe", 10.0, *stock);
        }
        let h = harness(inventory, MemoryStorage::default());

        futures::executor::block_on(async {
            for op in &ops {
                match *op {
                    Op::Add(id) => h.manager.add_product(ProductId::new(id)).await,
                    Op::Remove(id) => h.manager.remove_product(ProductId::new(id)),
                    Op::Update(id, amount) => h.manager.update_product_amount(update(id, amount)).await,
                }
            }
        });

        let cart = h.manager.cart();
        let mut seen = std::collections::HashSet::new();
        for item in cart.iter() {
            prop_assert!(seen.insert(item.id));
            prop_assert!(item.amount >= 1);
            prop_assert!(item.amount <= stocks[item.id.get() as usize - 1]);
        }
        prop_assert_eq!(h.storage.stored().unwrap_or_default(), cart.to_vec());
    }
}
