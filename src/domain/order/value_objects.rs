use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Unique order identifier, generated at placement.
///
/// Backed by a UUIDv7 so ids sort by placement time and stay unique across
/// the user's order history without any coordination.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORD-{}", self.0.simple())
    }
}

/// The fixed lifecycle an order passes through after placement.
///
/// `Confirmed` is defined and round-trips through persistence, but no
/// fulfillment event currently produces it; it is reserved for a future
/// restaurant-acceptance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Delivered is terminal; nothing moves an order past it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_ids_are_unique() {
        let first = OrderId::generate();
        let second = OrderId::generate();

        assert_ne!(first, second);
        assert!(first.to_string().starts_with("ORD-"));
    }

    #[test]
    fn test_status_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
            "\"out_for_delivery\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"placed\"").unwrap(),
            OrderStatus::Placed
        );
    }

    #[test]
    fn test_confirmed_round_trips_through_persistence() {
        let json = serde_json::to_string(&OrderStatus::Confirmed).unwrap();
        let status: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_only_delivered_is_terminal() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(!OrderStatus::Placed.is_terminal());
        assert!(!OrderStatus::OutForDelivery.is_terminal());
    }
}
