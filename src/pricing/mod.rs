// ============================================================================
// Pricing - Bill Breakdown & Coupons
// ============================================================================
//
// Pure derivations over the cart: subtotal, flat fees, coupon discount, and
// the grand total. Nothing here is stored; the order snapshot records only
// the total charged.
//
// ============================================================================

pub mod bill;
pub mod coupon;

// Re-export for convenience
pub use bill::*;
pub use coupon::*;
