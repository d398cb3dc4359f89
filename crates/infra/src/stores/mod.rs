//! Store boundaries consumed by order placement.
//!
//! Each store is a narrow async trait over one entity type. Concrete backends
//! live outside this workspace; the in-memory implementations here back tests
//! and local development.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore};
pub use r#trait::{CustomerStore, OrderStore, ProductStore, StoreError};
