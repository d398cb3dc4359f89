use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderdesk_infra::PlaceOrderError;
use orderdesk_sales::PlacementError;

pub fn place_error_to_response(err: PlaceOrderError) -> axum::response::Response {
    match err {
        PlaceOrderError::Rejected(reason) => {
            let status = match &reason {
                PlacementError::CustomerNotFound(_) | PlacementError::ProductNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                PlacementError::InsufficientStock { .. } => StatusCode::CONFLICT,
                PlacementError::EmptyOrder | PlacementError::InvalidQuantity(_) => {
                    StatusCode::BAD_REQUEST
                }
                PlacementError::TotalOverflow => StatusCode::UNPROCESSABLE_ENTITY,
            };
            json_error(status, reason.code(), reason.to_string())
        }
        PlaceOrderError::Store(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
        e @ PlaceOrderError::StockNotDecremented { .. } => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "stock_not_decremented",
            e.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use orderdesk_core::{CustomerId, OrderId, ProductId};
    use orderdesk_infra::StoreError;
    use orderdesk_parties::Customer;
    use orderdesk_sales::{NewOrder, Order, OrderLineItem};

    async fn status_and_code(err: PlaceOrderError) -> (StatusCode, serde_json::Value) {
        let resp = place_error_to_response(err);
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    fn committed_order() -> Order {
        let customer =
            Customer::register(CustomerId::new(), "Ada", "ada@example.com", Utc::now()).unwrap();
        let line = OrderLineItem {
            product_id: ProductId::new(),
            unit_price: "10.0".parse().unwrap(),
            quantity: 1,
        };
        Order::from_new(
            OrderId::new(),
            NewOrder::new(customer, vec![line]).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn rejections_map_to_client_errors() {
        let cases = [
            (
                PlacementError::CustomerNotFound(CustomerId::new()),
                StatusCode::NOT_FOUND,
                "customer_not_found",
            ),
            (
                PlacementError::ProductNotFound(ProductId::new()),
                StatusCode::NOT_FOUND,
                "product_not_found",
            ),
            (
                PlacementError::InsufficientStock {
                    product_id: ProductId::new(),
                    requested: 3,
                    available: 1,
                },
                StatusCode::CONFLICT,
                "insufficient_stock",
            ),
            (PlacementError::EmptyOrder, StatusCode::BAD_REQUEST, "empty_order"),
            (
                PlacementError::InvalidQuantity(ProductId::new()),
                StatusCode::BAD_REQUEST,
                "invalid_quantity",
            ),
            (
                PlacementError::TotalOverflow,
                StatusCode::UNPROCESSABLE_ENTITY,
                "total_overflow",
            ),
        ];

        for (reason, expected_status, expected_code) in cases {
            let message = reason.to_string();
            let (status, body) = status_and_code(PlaceOrderError::Rejected(reason)).await;
            assert_eq!(status, expected_status, "{expected_code}");
            assert_eq!(body["error"], expected_code);
            assert_eq!(body["message"], message);
        }
    }

    #[tokio::test]
    async fn store_failure_is_internal_error() {
        let err = PlaceOrderError::Store(StoreError::Unavailable("db down".to_string()));
        let (status, body) = status_and_code(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "store_error");
    }

    #[tokio::test]
    async fn missed_decrement_is_internal_error_naming_the_order() {
        let order = committed_order();
        let order_id = order.id.to_string();
        let err = PlaceOrderError::StockNotDecremented {
            order: Box::new(order),
            source: StoreError::Rejected("stock would go negative".to_string()),
        };
        let (status, body) = status_and_code(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "stock_not_decremented");
        assert!(body["message"].as_str().unwrap().contains(&order_id));
    }
}
