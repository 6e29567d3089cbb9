// ============================================================================
// Order Domain - Placement Snapshot & Lifecycle
// ============================================================================
//
// This module contains ALL order-specific code:
// - Value objects (OrderId, OrderStatus)
// - Events (fulfillment pushes: Preparing, OutForDelivery, Delivered)
// - Errors (OrderError enum)
// - Aggregate (Order with lifecycle validation)
//
// Orders are immutable after placement except for status, which moves only
// when a fulfillment event arrives - never on a local timer.
//
// ============================================================================

pub mod aggregate;
pub mod errors;
pub mod events;
pub mod value_objects;

// Re-export for convenience
pub use aggregate::*;
pub use errors::*;
pub use events::*;
pub use value_objects::*;
