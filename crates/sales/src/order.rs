use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerId, OrderId, ProductId};
use orderdesk_parties::Customer;
use orderdesk_products::StockDecrement;

use crate::error::PlacementError;

/// One product + quantity the customer asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl RequestedItem {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Caller-supplied order request. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub customer_id: CustomerId,
    pub items: Vec<RequestedItem>,
}

impl OrderRequest {
    pub fn new(customer_id: CustomerId, items: Vec<RequestedItem>) -> Self {
        Self { customer_id, items }
    }

    /// Shape checks that need no store access.
    pub fn validate(&self) -> Result<(), PlacementError> {
        if self.items.is_empty() {
            return Err(PlacementError::EmptyOrder);
        }

        if let Some(item) = self.items.iter().find(|i| i.quantity == 0) {
            return Err(PlacementError::InvalidQuantity(item.product_id));
        }

        Ok(())
    }

    /// Product ids referenced by the request, deduplicated, in first-seen order.
    pub fn distinct_product_ids(&self) -> Vec<ProductId> {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .map(|i| i.product_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// One decrement per requested item. Repeated products are not merged.
    pub fn stock_decrements(&self) -> Vec<StockDecrement> {
        self.items
            .iter()
            .map(|i| StockDecrement::new(i.product_id, i.quantity))
            .collect()
    }
}

/// Order line: product, quantity, and the unit price captured at placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLineItem {
    /// `unit_price * quantity`, or `None` when it does not fit in a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Sum of line subtotals with overflow checking.
pub fn order_total(line_items: &[OrderLineItem]) -> Result<Decimal, PlacementError> {
    line_items.iter().try_fold(Decimal::ZERO, |total, line| {
        line.subtotal()
            .and_then(|subtotal| total.checked_add(subtotal))
            .ok_or(PlacementError::TotalOverflow)
    })
}

/// An order that passed validation but has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub line_items: Vec<OrderLineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl NewOrder {
    /// Fixes the total up front so nothing downstream has to do arithmetic.
    pub fn new(customer: Customer, line_items: Vec<OrderLineItem>) -> Result<Self, PlacementError> {
        let total = order_total(&line_items)?;
        Ok(Self {
            customer,
            line_items,
            total,
        })
    }
}

/// A persisted order, as returned by the order store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub line_items: Vec<OrderLineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Materialise a new order with store-assigned identity and timestamps.
    pub fn from_new(id: OrderId, new: NewOrder, at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer: new.customer,
            line_items: new.line_items,
            total: new.total,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_customer() -> Customer {
        Customer::register(CustomerId::new(), "Ada", "ada@example.com", Utc::now()).unwrap()
    }

    fn line(product_id: ProductId, price: &str, quantity: u32) -> OrderLineItem {
        OrderLineItem {
            product_id,
            unit_price: price.parse().unwrap(),
            quantity,
        }
    }

    #[test]
    fn validate_rejects_empty_request() {
        let req = OrderRequest::new(CustomerId::new(), vec![]);
        assert_eq!(req.validate(), Err(PlacementError::EmptyOrder));
    }

    #[test]
    fn validate_rejects_zero_quantity_naming_the_product() {
        let ok = ProductId::new();
        let zero = ProductId::new();
        let req = OrderRequest::new(
            CustomerId::new(),
            vec![RequestedItem::new(ok, 1), RequestedItem::new(zero, 0)],
        );
        assert_eq!(req.validate(), Err(PlacementError::InvalidQuantity(zero)));
    }

    #[test]
    fn distinct_product_ids_keeps_first_seen_order() {
        let a = ProductId::new();
        let b = ProductId::new();
        let req = OrderRequest::new(
            CustomerId::new(),
            vec![
                RequestedItem::new(b, 1),
                RequestedItem::new(a, 2),
                RequestedItem::new(b, 3),
            ],
        );
        assert_eq!(req.distinct_product_ids(), vec![b, a]);
    }

    #[test]
    fn stock_decrements_mirror_requested_items_including_duplicates() {
        let a = ProductId::new();
        let req = OrderRequest::new(
            CustomerId::new(),
            vec![RequestedItem::new(a, 1), RequestedItem::new(a, 4)],
        );
        assert_eq!(
            req.stock_decrements(),
            vec![StockDecrement::new(a, 1), StockDecrement::new(a, 4)]
        );
    }

    #[test]
    fn total_sums_line_subtotals() {
        let new = NewOrder::new(
            test_customer(),
            vec![
                line(ProductId::new(), "10.00", 3),
                line(ProductId::new(), "0.25", 2),
            ],
        )
        .unwrap();
        let order = Order::from_new(OrderId::new(), new, Utc::now());
        assert_eq!(order.total, "30.50".parse::<Decimal>().unwrap());
    }

    #[test]
    fn subtotal_overflow_is_none() {
        let huge = line(ProductId::new(), "10000000000000000000000", 1_000_000_000);
        assert_eq!(huge.subtotal(), None);
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let res = NewOrder::new(
            test_customer(),
            vec![line(ProductId::new(), "10000000000000000000000", 1_000_000_000)],
        );
        assert_eq!(res, Err(PlacementError::TotalOverflow));
    }

    #[test]
    fn overflow_in_the_running_sum_is_rejected() {
        // Each line fits on its own; their sum does not.
        let max = Decimal::MAX.to_string();
        let res = order_total(&[line(ProductId::new(), &max, 1), line(ProductId::new(), &max, 1)]);
        assert_eq!(res, Err(PlacementError::TotalOverflow));
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(order_total(&[]), Ok(Decimal::ZERO));
    }

    #[test]
    fn from_new_stamps_both_timestamps() {
        let at = Utc::now();
        let customer = test_customer();
        let order = Order::from_new(
            OrderId::new(),
            NewOrder::new(customer.clone(), vec![]).unwrap(),
            at,
        );
        assert_eq!(order.created_at, at);
        assert_eq!(order.updated_at, at);
        assert_eq!(order.customer_id(), customer.id);
    }
}
