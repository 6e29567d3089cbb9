use chrono::Utc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eats_core::catalog::{CatalogProvider, SampleCatalog};
use eats_core::domain::order::{
    FulfillmentEvent, OrderDelivered, OrderOutForDelivery, OrderPreparing,
};
use eats_core::geocode::{resolve_address, StaticGeocoder};
use eats_core::store::JsonFileStore;
use eats_core::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,eats_core=debug")),
        )
        .init();

    tracing::info!("🍛 Starting Venkatagiri Eats core demo");

    // === 1. Fetch the catalog ===
    let catalog = SampleCatalog::new();
    let restaurants = match catalog.fetch_catalog().await {
        Ok(restaurants) => restaurants,
        Err(e) => {
            // Unavailable catalog degrades to "no restaurants to show".
            tracing::warn!("Catalog unavailable: {e}");
            Vec::new()
        }
    };
    tracing::info!("🏪 Loaded {} restaurants", restaurants.len());

    let Some(restaurant) = restaurants.first() else {
        tracing::info!("No restaurants to show");
        return Ok(());
    };

    // === 2. Hydrate the session from disk ===
    let store = JsonFileStore::open(std::env::temp_dir().join("venkatagiri-eats"))?;
    let mut session = Session::hydrate(store)?;
    tracing::info!("📦 {} past orders in history", session.orders().len());

    session.toggle_favorite(&restaurant.id)?;

    // === 3. Build a cart ===
    let biryani = restaurant.menu_item("s1").expect("sample menu has s1");
    let lassi = restaurant.menu_item("s49").expect("sample menu has s49");

    session.add_to_cart(biryani, restaurant, Some("extra spicy".to_string()));
    session.add_to_cart(biryani, restaurant, None);
    session.add_to_cart(lassi, restaurant, None);
    session.update_quantity(&lassi.id, 1);
    tracing::info!(
        "🛒 Cart: {} items, subtotal ₹{}",
        session.cart().item_count(),
        session.cart().subtotal()
    );

    // === 4. Apply a coupon and show the bill ===
    if let Err(e) = session.apply_coupon("BADCODE") {
        tracing::info!("❌ {e}");
    }
    session
        .apply_coupon("WELCOME50")
        .expect("welcome coupon is valid");

    let bill = session.bill();
    tracing::info!(
        "🧾 Bill: subtotal ₹{} + fees ₹{} - discount ₹{} = ₹{}",
        bill.subtotal,
        bill.delivery_fee + bill.platform_fee,
        bill.discount,
        bill.total
    );

    // === 5. Resolve the delivery address ===
    let geocoder = StaticGeocoder::returning("Main Road, Venkatagiri");
    let address = resolve_address(&geocoder, 13.9601, 79.5820).await;
    tracing::info!("📍 Delivering to: {address}");

    // === 6. Place the order ===
    let order_id = session.place_order(None)?.id;
    tracing::info!("✅ Order placed: {order_id}");

    // === 7. Fulfillment pushes advance the status ===
    // Stand in for the fulfillment system: each push is an explicit event,
    // the status never moves on a local timer.
    let pushes = [
        FulfillmentEvent::Preparing(OrderPreparing {
            started_at: Utc::now(),
        }),
        FulfillmentEvent::OutForDelivery(OrderOutForDelivery {
            dispatched_at: Utc::now(),
        }),
        FulfillmentEvent::Delivered(OrderDelivered {
            delivered_at: Utc::now(),
        }),
    ];
    for push in &pushes {
        tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
        let status = session.record_fulfillment(order_id, push)?;
        tracing::info!("🚴 Order status: {status:?}");
    }

    tracing::info!("🎉 Demo complete!");
    Ok(())
}
