use super::value_objects::{OrderId, OrderStatus};

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Cannot place an order on an empty cart")]
    EmptyCart,

    #[error("Order is already delivered")]
    AlreadyDelivered,

    #[error("Cannot apply {event} in status: {status:?}")]
    InvalidStatusTransition {
        status: OrderStatus,
        event: &'static str,
    },

    #[error("No order with id {0} in history")]
    UnknownOrder(OrderId),
}
