use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use orderdesk_core::{CustomerId, OrderId, ProductId};
use orderdesk_parties::Customer;
use orderdesk_products::{ProductSnapshot, StockDecrement};
use orderdesk_sales::{NewOrder, Order};

use super::r#trait::{CustomerStore, OrderStore, ProductStore, StoreError};

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

/// In-memory customer store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a customer record.
    pub fn insert(&self, customer: Customer) {
        if let Ok(mut map) = self.customers.write() {
            map.insert(customer.id, customer);
        }
    }

    pub fn len(&self) -> usize {
        self.customers.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let map = self.customers.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }
}

/// In-memory product store (catalog price + stock level).
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<ProductId, ProductSnapshot>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product record.
    pub fn insert(&self, product: ProductSnapshot) {
        if let Ok(mut map) = self.products.write() {
            map.insert(product.id, product);
        }
    }

    /// Current record for `id`, if any.
    pub fn get(&self, id: ProductId) -> Option<ProductSnapshot> {
        self.products.read().ok()?.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<ProductSnapshot>, StoreError> {
        let map = self.products.read().map_err(|_| poisoned())?;
        Ok(ids.iter().filter_map(|id| map.get(id).cloned()).collect())
    }

    async fn update_quantity(&self, items: Vec<StockDecrement>) -> Result<(), StoreError> {
        let mut map = self.products.write().map_err(|_| poisoned())?;

        // Validate the whole batch before touching anything.
        let mut remaining: HashMap<ProductId, u32> = HashMap::new();
        for item in &items {
            let current = match remaining.get(&item.product_id) {
                Some(q) => *q,
                None => map
                    .get(&item.product_id)
                    .map(|p| p.available_quantity)
                    .ok_or_else(|| {
                        StoreError::Rejected(format!("unknown product {}", item.product_id))
                    })?,
            };
            let next = current.checked_sub(item.quantity).ok_or_else(|| {
                StoreError::Rejected(format!(
                    "stock of product {} would go negative ({} - {})",
                    item.product_id, current, item.quantity
                ))
            })?;
            remaining.insert(item.product_id, next);
        }

        for (id, quantity) in remaining {
            if let Some(product) = map.get_mut(&id) {
                product.available_quantity = quantity;
            }
        }

        Ok(())
    }
}

/// In-memory append-only order store.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.orders.read().ok()?.iter().find(|o| o.id == id).cloned()
    }

    /// All orders, in creation order.
    pub fn list(&self) -> Vec<Order> {
        self.orders.read().map(|o| o.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
        let stored = Order::from_new(OrderId::new(), order, Utc::now());
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        orders.push(stored.clone());
        Ok(stored)
    }
}
