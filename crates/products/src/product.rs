use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, ProductId};

/// Point-in-time view of a product: price and available stock as the product
/// store saw them when the lookup ran.
///
/// A snapshot is not refreshed during an order placement; by the time the order
/// is committed the live stock level may already differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub available_quantity: u32,
}

impl ProductSnapshot {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        available_quantity: u32,
    ) -> DomainResult<Self> {
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(DomainError::validation(format!(
                "unit_price must be non-negative (got {unit_price})"
            )));
        }

        Ok(Self {
            id,
            name: name.into(),
            unit_price,
            available_quantity,
        })
    }

    /// Whether `quantity` units can be taken from this snapshot's stock.
    pub fn can_fulfil(&self, quantity: u32) -> bool {
        quantity <= self.available_quantity
    }
}

/// Instruction to the product store: take `quantity` units off `product_id`'s stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDecrement {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl StockDecrement {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_negative_price() {
        let err = ProductSnapshot::new(ProductId::new(), "Widget", price("-0.01"), 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn accepts_free_products() {
        let snapshot = ProductSnapshot::new(ProductId::new(), "Sample", Decimal::ZERO, 3).unwrap();
        assert!(snapshot.unit_price.is_zero());
    }

    #[test]
    fn can_fulfil_is_inclusive_of_available_stock() {
        let snapshot = ProductSnapshot::new(ProductId::new(), "Widget", price("10.00"), 5).unwrap();
        assert!(snapshot.can_fulfil(5));
        assert!(!snapshot.can_fulfil(6));
    }

    #[test]
    fn price_serializes_as_string() {
        let snapshot = ProductSnapshot::new(ProductId::new(), "Widget", price("10.50"), 5).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["unit_price"], "10.50");
        assert_eq!(json["available_quantity"], 5);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a snapshot can fulfil exactly the quantities up to its stock.
            #[test]
            fn can_fulfil_matches_comparison(available in 0u32..10_000, requested in 0u32..10_000) {
                let snapshot = ProductSnapshot::new(ProductId::new(), "Widget", Decimal::ONE, available).unwrap();
                prop_assert_eq!(snapshot.can_fulfil(requested), requested <= available);
            }
        }
    }
}
