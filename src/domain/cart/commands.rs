use crate::catalog::{MenuItem, Restaurant};

// ============================================================================
// Cart Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Add one unit of a menu item, merging into an existing line when the
    /// item id is already in the cart.
    AddItem {
        item: MenuItem,
        restaurant: Restaurant,
        note: Option<String>,
    },
    /// Adjust a line's quantity by a signed delta, clamped at zero.
    UpdateQuantity { item_id: String, delta: i32 },
    /// Empty the cart (after successful order placement).
    Clear,
}
