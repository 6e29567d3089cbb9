// ============================================================================
// Coupon Resolution
// ============================================================================

/// The single supported coupon code: 50% off the item subtotal.
pub const WELCOME_CODE: &str = "WELCOME50";

#[derive(Debug, thiserror::Error)]
pub enum CouponError {
    #[error("Invalid coupon code")]
    InvalidCode(String),
}

/// Resolve a coupon code against the current subtotal.
///
/// `WELCOME50` (case-insensitive) yields `ceil(subtotal * 0.5)`. Any other
/// code is `InvalidCode`; the caller resets its applied discount to 0, so a
/// failed attempt always clears a previously applied coupon.
pub fn resolve_coupon(code: &str, subtotal: u64) -> Result<u64, CouponError> {
    if code.eq_ignore_ascii_case(WELCOME_CODE) {
        Ok(subtotal.div_ceil(2))
    } else {
        Err(CouponError::InvalidCode(code.to_string()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
