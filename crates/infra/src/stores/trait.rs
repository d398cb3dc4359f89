use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use orderdesk_core::{CustomerId, ProductId};
use orderdesk_parties::Customer;
use orderdesk_products::{ProductSnapshot, StockDecrement};
use orderdesk_sales::{NewOrder, Order};

/// Store operation error.
///
/// These are **infrastructure errors** (backend unreachable, write refused) as
/// opposed to placement rejections, which are decided in `orderdesk-sales`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not serve the request (connection, lock, timeout).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend refused a write (constraint, unknown record, negative stock).
    #[error("store rejected write: {0}")]
    Rejected(String),
}

/// Customer lookup boundary.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// `Ok(None)` when no customer has this id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;
}

/// Product lookup and stock update boundary.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Batched lookup. Only the products that exist are returned; unknown ids
    /// are simply absent from the result.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<ProductSnapshot>, StoreError>;

    /// Take each decrement's quantity off the referenced product's stock.
    async fn update_quantity(&self, items: Vec<StockDecrement>) -> Result<(), StoreError>;
}

/// Order persistence boundary.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist the order and return its stored form (id and timestamps assigned).
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError>;
}

#[async_trait]
impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        (**self).find_by_id(id).await
    }
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<ProductSnapshot>, StoreError> {
        (**self).find_all_by_id(ids).await
    }

    async fn update_quantity(&self, items: Vec<StockDecrement>) -> Result<(), StoreError> {
        (**self).update_quantity(items).await
    }
}

#[async_trait]
impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
        (**self).create(order).await
    }
}
