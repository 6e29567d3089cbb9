use serde::{Deserialize, Serialize};

use crate::domain::cart::Cart;

// ============================================================================
// Bill Breakdown - Derived Cart Pricing
// ============================================================================

/// Flat delivery charge, applied only when the cart is non-empty.
pub const DELIVERY_FEE: u64 = 30;
/// Flat platform charge, applied only when the cart is non-empty.
pub const PLATFORM_FEE: u64 = 5;

/// Decomposition of a cart's monetary total. Derived on demand, never
/// stored; the order records only the final total charged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillBreakdown {
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub platform_fee: u64,
    pub discount: u64,
    pub total: u64,
}

impl BillBreakdown {
    /// Compute the bill for the current cart and applied discount.
    ///
    /// `total = max(0, subtotal + fees - discount)`; fees are skipped
    /// entirely for an empty cart.
    pub fn compute(cart: &Cart, discount: u64) -> Self {
        let subtotal = cart.subtotal();
        let (delivery_fee, platform_fee) = if subtotal > 0 {
            (DELIVERY_FEE, PLATFORM_FEE)
        } else {
            (0, 0)
        };
        let total = (subtotal + delivery_fee + platform_fee).saturating_sub(discount);

        Self {
            subtotal,
            delivery_fee,
            platform_fee,
            discount,
            total,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::test_support::{create_test_item, create_test_restaurant};

    fn create_test_cart() -> Cart {
        // {price: 200, qty: 1} + {price: 100, qty: 2}
        let restaurant = create_test_restaurant();
        Cart::new()
            .add_item(&create_test_item("s1", 200), &restaurant, None)
            .add_item(&create_test_item("s12", 100), &restaurant, None)
            .add_item(&create_test_item("s12", 100), &restaurant, None)
    }

    #[test]
    fn test_bill_with_flat_fees() {
        let bill = BillBreakdown::compute(&create_test_cart(), 0);

        assert_eq!(bill.subtotal, 400);
        assert_eq!(bill.delivery_fee, 30);
        assert_eq!(bill.platform_fee, 5);
        assert_eq!(bill.total, 435);
    }

    #[test]
    fn test_empty_cart_has_no_fees() {
        let bill = BillBreakdown::compute(&Cart::new(), 0);

        assert_eq!(bill.subtotal, 0);
        assert_eq!(bill.delivery_fee, 0);
        assert_eq!(bill.platform_fee, 0);
        assert_eq!(bill.total, 0);
    }

    #[test]
    fn test_discount_reduces_total() {
        let bill = BillBreakdown::compute(&create_test_cart(), 200);

        assert_eq!(bill.discount, 200);
        assert_eq!(bill.total, 235);
    }

    #[test]
    fn test_total_never_goes_negative() {
        let bill = BillBreakdown::compute(&create_test_cart(), 10_000);

        assert_eq!(bill.total, 0);
    }
}
