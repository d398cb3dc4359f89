//! Startup seed for the in-memory stores.
//!
//! ```json
//! {
//!   "customers": [{ "id": "…", "name": "Ada", "email": "ada@example.com" }],
//!   "products":  [{ "id": "…", "name": "Widget", "price": "10.00", "quantity": 5 }]
//! }
//! ```
//!
//! `id` is optional on both; a fresh one is generated when omitted.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;

use orderdesk_core::{CustomerId, ProductId};
use orderdesk_infra::{InMemoryCustomerStore, InMemoryProductStore};
use orderdesk_parties::Customer;
use orderdesk_products::ProductSnapshot;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub customers: Vec<SeedCustomer>,
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCustomer {
    pub id: Option<CustomerId>,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProduct {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl SeedData {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))
    }

    /// Validate every record and insert it. Nothing is inserted if any record is invalid.
    pub fn apply(
        &self,
        customers: &InMemoryCustomerStore,
        products: &InMemoryProductStore,
    ) -> anyhow::Result<()> {
        let now = Utc::now();

        let customer_records = self
            .customers
            .iter()
            .map(|c| {
                Customer::register(c.id.unwrap_or_default(), &c.name, &c.email, now)
                    .with_context(|| format!("invalid seed customer '{}'", c.name))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let product_records = self
            .products
            .iter()
            .map(|p| {
                ProductSnapshot::new(p.id.unwrap_or_default(), &p.name, p.price, p.quantity)
                    .with_context(|| format!("invalid seed product '{}'", p.name))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        tracing::info!(
            customers = customer_records.len(),
            products = product_records.len(),
            "seeding in-memory stores"
        );

        customer_records.into_iter().for_each(|c| customers.insert(c));
        product_records.into_iter().for_each(|p| products.insert(p));
        Ok(())
    }
}
