use serde::{Deserialize, Serialize};

use crate::catalog::{MenuItem, Restaurant};

// ============================================================================
// Cart Value Objects
// ============================================================================

/// One distinct orderable item in the cart: the menu item's fields plus the
/// running quantity, the owning restaurant, and an optional free-text
/// preparation note.
///
/// Merge identity is `id` alone, matching the menu item it came from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub original_price: Option<u32>,
    pub is_veg: bool,
    pub category: String,
    pub quantity: u32,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub note: Option<String>,
}

impl CartLine {
    /// First add of an item: quantity 1, tagged with the supplying restaurant.
    pub fn new(item: &MenuItem, restaurant: &Restaurant, note: Option<String>) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            original_price: item.original_price,
            is_veg: item.is_veg,
            category: item.category.clone(),
            quantity: 1,
            restaurant_id: restaurant.id.clone(),
            restaurant_name: restaurant.name.clone(),
            note,
        }
    }

    /// Price x quantity for this line.
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::test_support::{create_test_item, create_test_restaurant};

    #[test]
    fn test_new_line_starts_at_quantity_one() {
        let restaurant = create_test_restaurant();
        let item = create_test_item("s1", 200);

        let line = CartLine::new(&item, &restaurant, None);

        assert_eq!(line.quantity, 1);
        assert_eq!(line.restaurant_id, restaurant.id);
        assert_eq!(line.restaurant_name, restaurant.name);
        assert!(line.note.is_none());
    }

    #[test]
    fn test_line_total() {
        let restaurant = create_test_restaurant();
        let item = create_test_item("s1", 250);

        let mut line = CartLine::new(&item, &restaurant, None);
        line.quantity = 3;

        assert_eq!(line.line_total(), 750);
    }
}
