use thiserror::Error;

use orderdesk_core::{CustomerId, ProductId};

/// Why an order could not be placed.
///
/// Every variant is terminal: retrying the same request against the same store
/// state yields the same rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("customer {0} does not exist")]
    CustomerNotFound(CustomerId),

    #[error("product {0} was not found")]
    ProductNotFound(ProductId),

    #[error("product {product_id} is out of stock (requested {requested}, available {available})")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("an order must contain at least one product")]
    EmptyOrder,

    #[error("quantity for product {0} must be positive")]
    InvalidQuantity(ProductId),

    #[error("order total exceeds the representable amount")]
    TotalOverflow,
}

impl PlacementError {
    /// Stable machine-readable code (used by the HTTP layer and in logs).
    pub fn code(&self) -> &'static str {
        match self {
            PlacementError::CustomerNotFound(_) => "customer_not_found",
            PlacementError::ProductNotFound(_) => "product_not_found",
            PlacementError::InsufficientStock { .. } => "insufficient_stock",
            PlacementError::EmptyOrder => "empty_order",
            PlacementError::InvalidQuantity(_) => "invalid_quantity",
            PlacementError::TotalOverflow => "total_overflow",
        }
    }
}
