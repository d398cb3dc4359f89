//! Decision step of order placement: turn requested items into priced lines.
//!
//! Pure and deterministic. The caller supplies the product snapshots it read;
//! this module never looks anything up itself.

use std::collections::HashMap;

use orderdesk_core::ProductId;
use orderdesk_products::ProductSnapshot;

use crate::error::PlacementError;
use crate::order::{OrderLineItem, RequestedItem};

/// Price every requested item against the snapshots, in request order.
///
/// The first item that fails wins: a missing snapshot yields
/// [`PlacementError::ProductNotFound`], a quantity above the snapshot's stock
/// yields [`PlacementError::InsufficientStock`]. Repeated products are checked
/// independently against the same snapshot and produce separate lines.
pub fn price_line_items(
    items: &[RequestedItem],
    snapshots: &[ProductSnapshot],
) -> Result<Vec<OrderLineItem>, PlacementError> {
    let by_id: HashMap<ProductId, &ProductSnapshot> =
        snapshots.iter().map(|s| (s.id, s)).collect();

    items
        .iter()
        .map(|item| {
            let snapshot = by_id
                .get(&item.product_id)
                .ok_or(PlacementError::ProductNotFound(item.product_id))?;

            if !snapshot.can_fulfil(item.quantity) {
                return Err(PlacementError::InsufficientStock {
                    product_id: item.product_id,
                    requested: item.quantity,
                    available: snapshot.available_quantity,
                });
            }

            Ok(OrderLineItem {
                product_id: item.product_id,
                unit_price: snapshot.unit_price,
                quantity: item.quantity,
            })
        })
        .collect()
}
