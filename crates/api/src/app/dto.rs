use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use orderdesk_core::{CustomerId, ProductId};
use orderdesk_sales::{Order, RequestedItem};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub products: Vec<OrderProductRequest>,
}

#[derive(Debug, Deserialize)]
pub struct OrderProductRequest {
    pub id: String,
    pub quantity: u32,
}

impl CreateOrderRequest {
    /// Parse identifiers; any malformed id is a 400.
    pub fn into_domain(self) -> Result<(CustomerId, Vec<RequestedItem>), axum::response::Response> {
        let customer_id: CustomerId = self.customer_id.parse().map_err(|_| {
            errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid customer id")
        })?;

        let items = self
            .products
            .into_iter()
            .map(|p| {
                let product_id: ProductId = p.id.parse().map_err(|_| {
                    errors::json_error(
                        StatusCode::BAD_REQUEST,
                        "invalid_id",
                        format!("invalid product id '{}'", p.id),
                    )
                })?;
                Ok::<_, axum::response::Response>(RequestedItem::new(product_id, p.quantity))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((customer_id, items))
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn order_to_json(order: &Order) -> serde_json::Value {
    json!({
        "id": order.id.to_string(),
        "customer": {
            "id": order.customer.id.to_string(),
            "name": order.customer.name,
            "email": order.customer.email,
        },
        "products": order.line_items.iter().map(|l| json!({
            "product_id": l.product_id.to_string(),
            "price": l.unit_price.to_string(),
            "quantity": l.quantity,
        })).collect::<Vec<_>>(),
        "total": order.total.to_string(),
        "created_at": order.created_at.to_rfc3339(),
        "updated_at": order.updated_at.to_rfc3339(),
    })
}
