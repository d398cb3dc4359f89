//! Products domain module (catalog price + stock level).
//!
//! Pure data types shared by the order placement flow and the product store
//! (no IO, no HTTP, no storage).

pub mod product;

pub use product::{ProductSnapshot, StockDecrement};
