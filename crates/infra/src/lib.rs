//! Infrastructure layer: store boundaries and the order placement pipeline.

pub mod order_placement;
pub mod stores;


pub use order_placement::{OrderPlacement, PlaceOrderError};
pub use stores::{
    CustomerStore, InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore, OrderStore,
    ProductStore, StoreError,
};
