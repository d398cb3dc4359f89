//! Order placement pipeline (application-level orchestration).
//!
//! ```text
//! OrderRequest
//!   ↓
//! 0. Shape checks (non-empty, positive quantities)
//!   ↓
//! 1. Resolve customer                      (CustomerStore::find_by_id)
//!   ↓
//! 2. Resolve distinct products, one batch  (ProductStore::find_all_by_id)
//!   ↓
//! 3. Price + stock check, request order    (orderdesk_sales::price_line_items)
//!    then checked total                    (NewOrder::new)
//!   ↓
//! 4. Persist order                         (OrderStore::create)
//!   ↓
//! 5. Decrement stock per requested item    (ProductStore::update_quantity)
//! ```
//!
//! Nothing is written unless steps 0–3 pass. Steps 4 and 5 are not atomic: if the
//! decrement fails the order stays committed and the caller gets
//! [`PlaceOrderError::StockNotDecremented`] carrying that order. There is no
//! locking either; two concurrent placements can both pass step 3 against the
//! same stock.

use thiserror::Error;
use tracing::{error, info, instrument, warn};

use orderdesk_core::CustomerId;
use orderdesk_sales::{price_line_items, NewOrder, Order, OrderRequest, PlacementError, RequestedItem};

use crate::stores::{CustomerStore, OrderStore, ProductStore, StoreError};

#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// The request was refused; no store was mutated.
    #[error(transparent)]
    Rejected(#[from] PlacementError),

    /// A lookup or the order write failed; nothing was committed by this call.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    /// The order was committed but its stock decrement failed.
    #[error("order {} was created but stock was not decremented: {source}", .order.id)]
    StockNotDecremented {
        order: Box<Order>,
        #[source]
        source: StoreError,
    },
}

/// Places orders against three injected stores.
///
/// Generic over the store traits so tests run on the in-memory stores and a
/// deployment can plug in real backends without touching this code.
#[derive(Debug)]
pub struct OrderPlacement<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderPlacement<C, P, O> {
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }
}

impl<C, P, O> OrderPlacement<C, P, O>
where
    C: CustomerStore,
    P: ProductStore,
    O: OrderStore,
{
    /// Place an order for `customer_id`.
    ///
    /// Not idempotent: the same input placed twice yields two orders and two
    /// stock decrements.
    pub async fn place(
        &self,
        customer_id: CustomerId,
        items: Vec<RequestedItem>,
    ) -> Result<Order, PlaceOrderError> {
        self.place_request(OrderRequest::new(customer_id, items)).await
    }

    #[instrument(
        name = "order_placement",
        skip(self, request),
        fields(customer_id = %request.customer_id, items = request.items.len())
    )]
    pub async fn place_request(&self, request: OrderRequest) -> Result<Order, PlaceOrderError> {
        match self.decide(&request).await {
            Ok(new_order) => self.commit(&request, new_order).await,
            Err(PlaceOrderError::Rejected(reason)) => {
                warn!(code = reason.code(), %reason, "order rejected");
                Err(PlaceOrderError::Rejected(reason))
            }
            Err(e) => Err(e),
        }
    }

    /// Steps 0–3: read-only.
    async fn decide(&self, request: &OrderRequest) -> Result<NewOrder, PlaceOrderError> {
        request.validate()?;

        let customer = self
            .customers
            .find_by_id(request.customer_id)
            .await?
            .ok_or(PlacementError::CustomerNotFound(request.customer_id))?;

        let snapshots = self
            .products
            .find_all_by_id(&request.distinct_product_ids())
            .await?;

        let line_items = price_line_items(&request.items, &snapshots)?;

        Ok(NewOrder::new(customer, line_items)?)
    }

    /// Steps 4–5: order first, then stock.
    async fn commit(&self, request: &OrderRequest, new_order: NewOrder) -> Result<Order, PlaceOrderError> {
        let order = self.orders.create(new_order).await?;

        if let Err(source) = self.products.update_quantity(request.stock_decrements()).await {
            error!(order_id = %order.id, error = %source, "order committed without stock decrement");
            return Err(PlaceOrderError::StockNotDecremented {
                order: Box::new(order),
                source,
            });
        }

        info!(order_id = %order.id, lines = order.line_items.len(), total = %order.total, "order placed");
        Ok(order)
    }
}
