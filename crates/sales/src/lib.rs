//! Sales orders domain module.
//!
//! This crate contains the business rules of order placement (request shape,
//! price snapshotting, stock sufficiency), implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage). Orchestration against the stores
//! lives in `orderdesk-infra`.

pub mod error;
pub mod order;
pub mod pricing;

pub use error::PlacementError;
pub use order::{order_total, NewOrder, Order, OrderLineItem, OrderRequest, RequestedItem};
pub use pricing::price_line_items;
