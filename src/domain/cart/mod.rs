// ============================================================================
// Cart Domain - Cart Aggregation
// ============================================================================
//
// This module contains ALL cart-specific code:
// - Value objects (CartLine)
// - Commands (AddItem, UpdateQuantity, Clear)
// - Aggregate (Cart, reducer-style operations)
//
// Cart operations never fail; the quantity >= 1 invariant is restored by the
// same operation that could break it.
//
// ============================================================================

pub mod aggregate;
pub mod commands;
pub mod value_objects;

// Re-export for convenience
pub use aggregate::*;
pub use commands::*;
pub use value_objects::*;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::catalog::{MenuItem, Restaurant};

    pub fn create_test_restaurant() -> Restaurant {
        Restaurant {
            id: "supreme".to_string(),
            name: "Supreme Restaurant".to_string(),
            cuisine: "Biryani, Chinese, Desserts".to_string(),
            rating: 4.5,
            delivery_time: "25-30 mins".to_string(),
            image: "https://example.com/supreme.jpg".to_string(),
            address: "Main Road, Venkatagiri".to_string(),
            menu: vec![],
            has_offer: true,
        }
    }

    pub fn create_test_item(id: &str, price: u32) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            description: "Test menu item".to_string(),
            price,
            original_price: None,
            is_veg: true,
            category: "Test".to_string(),
        }
    }
}
