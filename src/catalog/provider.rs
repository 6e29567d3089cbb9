use async_trait::async_trait;
use tokio::time::Duration;

use super::models::{MenuItem, Restaurant};

// ============================================================================
// Catalog Provider - Read-Only Restaurant Source
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only source of restaurants. Each call returns a fresh snapshot.
///
/// An empty result means "no restaurants found" and is not an error;
/// `CatalogError::Unavailable` is reserved for an unreachable upstream.
#[async_trait]
pub trait CatalogProvider {
    async fn fetch_catalog(&self) -> Result<Vec<Restaurant>, CatalogError>;
}

/// Built-in catalog with embedded sample data behind a simulated network
/// delay, standing in for the real menu-catalog service.
pub struct SampleCatalog {
    delay: Duration,
}

impl SampleCatalog {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(800),
        }
    }

    /// No artificial latency. Used by tests.
    pub fn without_delay() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for SampleCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Restaurant>, CatalogError> {
        tokio::time::sleep(self.delay).await;
        Ok(sample_restaurants())
    }
}

fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    price: u32,
    original_price: Option<u32>,
    is_veg: bool,
    category: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        original_price,
        is_veg,
        category: category.to_string(),
    }
}

/// Representative subset of the Venkatagiri restaurant data.
fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "supreme".to_string(),
            name: "Supreme Restaurant".to_string(),
            cuisine: "Biryani, Chinese, Desserts".to_string(),
            rating: 4.5,
            delivery_time: "25-30 mins".to_string(),
            image: "https://images.unsplash.com/photo-1563379091339-03b21ab4a4f8".to_string(),
            address: "Main Road, Venkatagiri".to_string(),
            has_offer: true,
            menu: vec![
                menu_item(
                    "s1",
                    "Chicken Dum Biryani",
                    "Classic Hyderabadi style dum biryani",
                    200,
                    Some(250),
                    false,
                    "Biryani",
                ),
                menu_item(
                    "s2",
                    "Family Pack Chicken Dum Biriyani",
                    "Serves 3-4 people (Super Saver)",
                    500,
                    Some(1000),
                    false,
                    "Biryani",
                ),
                menu_item(
                    "s11",
                    "Veg Biryani",
                    "Assorted vegetables cooked with aromatic spices",
                    160,
                    None,
                    true,
                    "Biryani",
                ),
                menu_item(
                    "s14",
                    "Chicken Fried Rice",
                    "Wok tossed rice with chicken and veggies",
                    170,
                    None,
                    false,
                    "Fried Rice",
                ),
                menu_item(
                    "s34",
                    "Gulab Jamun with Ice Cream",
                    "Hot jamun with cold vanilla",
                    100,
                    None,
                    true,
                    "Desserts & Ice Creams",
                ),
                menu_item(
                    "s49",
                    "Sweet Lassi",
                    "Thick yogurt drink",
                    50,
                    None,
                    true,
                    "Beverages",
                ),
            ],
        },
        Restaurant {
            id: "mamas".to_string(),
            name: "Mama's Kitchen".to_string(),
            cuisine: "Andhra, Biryani, Fast Food".to_string(),
            rating: 4.3,
            delivery_time: "30-35 mins".to_string(),
            image: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5".to_string(),
            address: "Teachers Colony, Venkatagiri Bazar".to_string(),
            has_offer: false,
            menu: vec![
                menu_item(
                    "m1",
                    "Chicken Dum Biryani",
                    "Spicy Andhra style",
                    150,
                    None,
                    false,
                    "Biryani",
                ),
                menu_item(
                    "m11",
                    "Veg Biryani",
                    "Garden fresh veg biryani",
                    110,
                    None,
                    true,
                    "Biryani",
                ),
                menu_item(
                    "m16",
                    "Egg Fried Rice",
                    "Scrambled egg rice",
                    100,
                    None,
                    false,
                    "Fried Rice",
                ),
                menu_item(
                    "m26",
                    "Plain Rice",
                    "White rice",
                    60,
                    None,
                    true,
                    "Fried Rice",
                ),
            ],
        },
    ]
}

// ============================================================================
// Unit Tests
// ============================================================================
