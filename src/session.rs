use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::{MenuItem, Restaurant};
use crate::domain::cart::Cart;
use crate::domain::order::{FulfillmentEvent, Order, OrderError, OrderId, OrderStatus};
use crate::pricing::{resolve_coupon, BillBreakdown, CouponError};
use crate::store::{StateStore, FAVORITES_KEY, ORDERS_KEY};

// ============================================================================
// Session - Single-User State Orchestration
// ============================================================================
//
// Orchestrates: Intent -> Domain Logic -> Store
//
// One logical thread of control. The session hydrates favorites and order
// history from the injected store at startup and persists on every durable
// mutation. The cart and the applied discount live only in memory, like the
// component state they model.
//
// ============================================================================

pub struct Session<S: StateStore> {
    store: S,
    cart: Cart,
    discount: u64,
    favorites: Vec<String>,
    orders: Vec<Order>,
}

impl<S: StateStore> Session<S> {
    /// Hydrate a session from the store. Missing records start empty.
    pub fn hydrate(store: S) -> Result<Self> {
        let favorites = match store.get(FAVORITES_KEY)? {
            Some(value) => {
                serde_json::from_value(value).context("Failed to decode favorites record")?
            }
            None => Vec::new(),
        };
        let orders: Vec<Order> = match store.get(ORDERS_KEY)? {
            Some(value) => {
                serde_json::from_value(value).context("Failed to decode order history record")?
            }
            None => Vec::new(),
        };

        info!(
            favorites = favorites.len(),
            orders = orders.len(),
            "Session hydrated"
        );

        Ok(Self {
            store,
            cart: Cart::new(),
            discount: 0,
            favorites,
            orders,
        })
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, item: &MenuItem, restaurant: &Restaurant, note: Option<String>) {
        self.cart = std::mem::take(&mut self.cart).add_item(item, restaurant, note);
    }

    pub fn update_quantity(&mut self, item_id: &str, delta: i32) {
        self.cart = std::mem::take(&mut self.cart).update_quantity(item_id, delta);
    }

    pub fn clear_cart(&mut self) {
        self.cart = std::mem::take(&mut self.cart).clear();
        self.discount = 0;
    }

    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------

    /// Current bill for the cart with the applied coupon discount.
    pub fn bill(&self) -> BillBreakdown {
        BillBreakdown::compute(&self.cart, self.discount)
    }

    /// Resolve a coupon against the current subtotal. On success the
    /// discount is applied; on failure it resets to 0, so a failed attempt
    /// always clears a previously applied coupon.
    pub fn apply_coupon(&mut self, code: &str) -> Result<u64, CouponError> {
        match resolve_coupon(code, self.cart.subtotal()) {
            Ok(discount) => {
                info!(code, discount, "Coupon applied");
                self.discount = discount;
                Ok(discount)
            }
            Err(e) => {
                self.discount = 0;
                Err(e)
            }
        }
    }

    pub fn discount(&self) -> u64 {
        self.discount
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, restaurant_id: &str) -> bool {
        self.favorites.iter().any(|id| id == restaurant_id)
    }

    /// Toggle a restaurant in the favorites list and persist it. Returns
    /// whether the restaurant is a favorite afterwards.
    pub fn toggle_favorite(&mut self, restaurant_id: &str) -> Result<bool> {
        let mut favorites = self.favorites.clone();
        let now_favorite = if let Some(pos) = favorites.iter().position(|id| id == restaurant_id) {
            favorites.remove(pos);
            false
        } else {
            favorites.push(restaurant_id.to_string());
            true
        };

        self.store
            .put(FAVORITES_KEY, serde_json::to_value(&favorites)?)?;
        self.favorites = favorites;
        Ok(now_favorite)
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    /// Order history, newest first. Entries never change structurally after
    /// append; only their status moves.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Place an order from the current cart: snapshot the lines, append to
    /// history, clear the cart. The snapshot is persisted before any
    /// in-memory state changes, so a store failure leaves the cart and the
    /// recorded history exactly as they were.
    pub fn place_order(&mut self, scheduled_for: Option<DateTime<Utc>>) -> Result<&Order> {
        let bill = self.bill();
        let order = Order::place(&self.cart, bill.total, scheduled_for)?;

        let mut orders = self.orders.clone();
        orders.insert(0, order);
        self.store.put(ORDERS_KEY, serde_json::to_value(&orders)?)?;

        info!(order_id = %orders[0].id, total = bill.total, "Order placed");
        self.orders = orders;
        self.cart = Cart::new();
        self.discount = 0;
        Ok(&self.orders[0])
    }

    /// Apply a fulfillment-system push to an order in the history and
    /// persist the new status. Returns the status after the transition.
    pub fn record_fulfillment(
        &mut self,
        order_id: OrderId,
        event: &FulfillmentEvent,
    ) -> Result<OrderStatus> {
        let mut orders = self.orders.clone();
        let order = orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or(OrderError::UnknownOrder(order_id))?;
        order.apply_event(event)?;
        let status = order.status;

        self.store.put(ORDERS_KEY, serde_json::to_value(&orders)?)?;

        info!(order_id = %order_id, status = ?status, "Order status advanced");
        self.orders = orders;
        Ok(status)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
