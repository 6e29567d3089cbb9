use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Value Objects
// ============================================================================

/// A single orderable dish on a restaurant's menu.
///
/// Prices are positive integers in the smallest display unit (whole rupees).
/// `original_price`, when present, marks a discounted item and is always
/// >= `price`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub original_price: Option<u32>,
    pub is_veg: bool,
    pub category: String,
}

/// A restaurant and its menu, as served by the catalog. Immutable once
/// fetched; every mutation in the system happens downstream of this.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub delivery_time: String,
    pub image: String,
    pub address: String,
    pub menu: Vec<MenuItem>,
    pub has_offer: bool,
}

impl Restaurant {
    /// Look up a menu item by id within this restaurant.
    pub fn menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == item_id)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
