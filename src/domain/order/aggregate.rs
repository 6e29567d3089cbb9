use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, CartLine};

use super::errors::OrderError;
use super::events::FulfillmentEvent;
use super::value_objects::{OrderId, OrderStatus};

// ============================================================================
// Order Aggregate - Placed-Order Snapshot & Lifecycle
// ============================================================================

/// Shown on order cards when the restaurant image is unknown at placement.
pub const FALLBACK_RESTAURANT_IMAGE: &str =
    "https://images.unsplash.com/photo-1555396273-367ea4eb4db5";

/// An order as recorded at placement time.
///
/// `items` is a snapshot of the cart lines at the moment of placement; later
/// cart mutation cannot reach back into it. After creation only `status`
/// moves, and only through `apply_event`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub total: u64,
    pub status: OrderStatus,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub restaurant_image: String,
    pub placed_at: DateTime<Utc>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

impl Order {
    /// Build the placement snapshot from the current cart. The cart itself
    /// is untouched; clearing it is the caller's second half of the atomic
    /// placement step.
    pub fn place(
        cart: &Cart,
        total: u64,
        scheduled_for: Option<DateTime<Utc>>,
    ) -> Result<Self, OrderError> {
        let first = cart.lines().first().ok_or(OrderError::EmptyCart)?;

        Ok(Self {
            id: OrderId::generate(),
            items: cart.lines().to_vec(),
            total,
            status: OrderStatus::Placed,
            restaurant_id: first.restaurant_id.clone(),
            restaurant_name: first.restaurant_name.clone(),
            restaurant_image: FALLBACK_RESTAURANT_IMAGE.to_string(),
            placed_at: Utc::now(),
            scheduled_for,
        })
    }

    /// Validate a fulfillment push against the fixed lifecycle and advance
    /// the status. Out-of-order pushes are rejected; Delivered is terminal.
    pub fn apply_event(&mut self, event: &FulfillmentEvent) -> Result<(), OrderError> {
        if self.status.is_terminal() {
            return Err(OrderError::AlreadyDelivered);
        }

        let next = match (self.status, event) {
            (OrderStatus::Placed, FulfillmentEvent::Preparing(_))
            | (OrderStatus::Confirmed, FulfillmentEvent::Preparing(_)) => OrderStatus::Preparing,
            (OrderStatus::Preparing, FulfillmentEvent::OutForDelivery(_)) => {
                OrderStatus::OutForDelivery
            }
            (OrderStatus::OutForDelivery, FulfillmentEvent::Delivered(_)) => {
                OrderStatus::Delivered
            }
            (status, event) => {
                return Err(OrderError::InvalidStatusTransition {
                    status,
                    event: event.event_type(),
                })
            }
        };

        self.status = next;
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::test_support::{create_test_item, create_test_restaurant};
    use crate::domain::order::events::{OrderDelivered, OrderOutForDelivery, OrderPreparing};

    fn create_test_cart() -> Cart {
        let restaurant = create_test_restaurant();
        Cart::new()
            .add_item(&create_test_item("s1", 200), &restaurant, None)
            .add_item(&create_test_item("s49", 50), &restaurant, None)
    }

    fn preparing() -> FulfillmentEvent {
        FulfillmentEvent::Preparing(OrderPreparing {
            started_at: Utc::now(),
        })
    }

    fn out_for_delivery() -> FulfillmentEvent {
        FulfillmentEvent::OutForDelivery(OrderOutForDelivery {
            dispatched_at: Utc::now(),
        })
    }

    fn delivered() -> FulfillmentEvent {
        FulfillmentEvent::Delivered(OrderDelivered {
            delivered_at: Utc::now(),
        })
    }

    #[test]
    fn test_place_snapshots_cart_lines() {
        let cart = create_test_cart();
        let order = Order::place(&cart, 285, None).unwrap();

        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total, 285);
        assert_eq!(order.restaurant_id, "supreme");
        assert_eq!(order.restaurant_name, "Supreme Restaurant");
        assert!(order.scheduled_for.is_none());
    }

    #[test]
    fn test_place_carries_scheduled_delivery_time() {
        let scheduled = Utc::now() + chrono::Duration::minutes(45);
        let order = Order::place(&create_test_cart(), 285, Some(scheduled)).unwrap();

        assert_eq!(order.scheduled_for, Some(scheduled));
    }

    #[test]
    fn test_place_on_empty_cart_fails() {
        let result = Order::place(&Cart::new(), 0, None);
        assert!(matches!(result, Err(OrderError::EmptyCart)));
    }

    #[test]
    fn test_snapshot_is_independent_of_later_cart_mutation() {
        let cart = create_test_cart();
        let order = Order::place(&cart, 285, None).unwrap();

        let mutated = cart.add_item(
            &create_test_item("s14", 170),
            &create_test_restaurant(),
            None,
        );

        assert_eq!(mutated.lines().len(), 3);
        assert_eq!(order.items.len(), 2); // unchanged
    }

    #[test]
    fn test_full_lifecycle_advances_in_order() {
        let mut order = Order::place(&create_test_cart(), 285, None).unwrap();

        order.apply_event(&preparing()).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);

        order.apply_event(&out_for_delivery()).unwrap();
        assert_eq!(order.status, OrderStatus::OutForDelivery);

        order.apply_event(&delivered()).unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_out_of_order_event_is_rejected() {
        let mut order = Order::place(&create_test_cart(), 285, None).unwrap();

        let result = order.apply_event(&delivered());
        assert!(matches!(
            result,
            Err(OrderError::InvalidStatusTransition { .. })
        ));
        assert_eq!(order.status, OrderStatus::Placed); // unchanged
    }

    #[test]
    fn test_delivered_is_terminal() {
        let mut order = Order::place(&create_test_cart(), 285, None).unwrap();
        order.apply_event(&preparing()).unwrap();
        order.apply_event(&out_for_delivery()).unwrap();
        order.apply_event(&delivered()).unwrap();

        let result = order.apply_event(&preparing());
        assert!(matches!(result, Err(OrderError::AlreadyDelivered)));
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_preparing_accepted_from_confirmed() {
        let mut order = Order::place(&create_test_cart(), 285, None).unwrap();
        order.status = OrderStatus::Confirmed;

        order.apply_event(&preparing()).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
    }
}
