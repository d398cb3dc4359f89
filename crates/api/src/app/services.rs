use std::sync::Arc;

use orderdesk_core::CustomerId;
use orderdesk_infra::{
    CustomerStore, InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore, OrderPlacement,
    OrderStore, PlaceOrderError, ProductStore,
};
use orderdesk_sales::{Order, RequestedItem};

use crate::config::ApiConfig;
use crate::seed::SeedData;

/// Placement pipeline over type-erased stores, so any backend can be wired in.
pub type DynOrderPlacement =
    OrderPlacement<Arc<dyn CustomerStore>, Arc<dyn ProductStore>, Arc<dyn OrderStore>>;

#[derive(Clone)]
pub struct AppServices {
    placement: Arc<DynOrderPlacement>,
}

impl AppServices {
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        products: Arc<dyn ProductStore>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            placement: Arc::new(OrderPlacement::new(customers, products, orders)),
        }
    }

    pub async fn place_order(
        &self,
        customer_id: CustomerId,
        items: Vec<RequestedItem>,
    ) -> Result<Order, PlaceOrderError> {
        self.placement.place(customer_id, items).await
    }
}

/// In-memory stores, kept concrete so callers can seed and inspect them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStores {
    pub customers: Arc<InMemoryCustomerStore>,
    pub products: Arc<InMemoryProductStore>,
    pub orders: Arc<InMemoryOrderStore>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> AppServices {
        AppServices::new(
            self.customers.clone(),
            self.products.clone(),
            self.orders.clone(),
        )
    }
}

/// Wire services for the process. Stores are in-memory (dev/test), optionally
/// seeded from `ORDERDESK_SEED_FILE`.
pub fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let stores = InMemoryStores::new();

    match &config.seed_file {
        Some(path) => SeedData::from_file(path)?.apply(&stores.customers, &stores.products)?,
        None => tracing::warn!("no seed file configured; in-memory stores start empty"),
    }

    Ok(stores.services())
}
