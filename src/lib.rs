// ============================================================================
// eats-core - Food-Ordering Storefront Core
// ============================================================================
//
// Cart aggregation, pricing, and the order lifecycle behind a food-ordering
// UI. The presentation layer calls these components synchronously; the only
// async boundaries are the catalog fetch and the reverse-geocode lookup.
//
// ============================================================================

pub mod catalog;
pub mod domain;
pub mod geocode;
pub mod pricing;
pub mod session;
pub mod store;

pub use session::Session;
