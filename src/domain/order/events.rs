use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Fulfillment Events - External Status Pushes
// ============================================================================
//
// Status never advances on a local timer. The fulfillment system (or the
// demo binary standing in for it) pushes one of these events and the order
// aggregate validates it against the fixed lifecycle before applying it.
//
// ============================================================================

/// Fulfillment Event - union type for all status pushes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FulfillmentEvent {
    Preparing(OrderPreparing),
    OutForDelivery(OrderOutForDelivery),
    Delivered(OrderDelivered),
}

impl FulfillmentEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            FulfillmentEvent::Preparing(_) => "OrderPreparing",
            FulfillmentEvent::OutForDelivery(_) => "OrderOutForDelivery",
            FulfillmentEvent::Delivered(_) => "OrderDelivered",
        }
    }
}

/// Order Preparing - the restaurant started cooking
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderPreparing {
    pub started_at: DateTime<Utc>,
}

/// Order Out For Delivery - handed to a delivery partner
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderOutForDelivery {
    pub dispatched_at: DateTime<Utc>,
}

/// Order Delivered - lifecycle ended
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderDelivered {
    pub delivered_at: DateTime<Utc>,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_uses_tagged_form() {
        let event = FulfillmentEvent::Delivered(OrderDelivered {
            delivered_at: Utc::now(),
        });

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Delivered\""));

        let deserialized: FulfillmentEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.event_type(), "OrderDelivered");
    }
}
