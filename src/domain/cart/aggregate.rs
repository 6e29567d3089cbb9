use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{MenuItem, Restaurant};

use super::commands::CartCommand;
use super::value_objects::CartLine;

// ============================================================================
// Cart Aggregate - Reducer-Style Cart State
// ============================================================================
//
// Every operation consumes the current cart and returns the next one; no
// operation fails. Invariant: a held line always has quantity >= 1 - any
// operation that drives a quantity to 0 removes the line before returning.
//
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order, for display.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (the cart badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price x quantity across all lines.
    pub fn subtotal(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Apply a command, returning the next cart state.
    pub fn handle(self, command: CartCommand) -> Cart {
        match command {
            CartCommand::AddItem {
                item,
                restaurant,
                note,
            } => self.add_item(&item, &restaurant, note),
            CartCommand::UpdateQuantity { item_id, delta } => {
                self.update_quantity(&item_id, delta)
            }
            CartCommand::Clear => self.clear(),
        }
    }

    /// Add one unit of `item`. An existing line with the same item id gets
    /// its quantity incremented; a non-empty note then overwrites the stored
    /// note, while an empty or omitted note leaves it untouched. Otherwise a
    /// new line is appended with quantity 1.
    pub fn add_item(
        mut self,
        item: &MenuItem,
        restaurant: &Restaurant,
        note: Option<String>,
    ) -> Cart {
        let note = note.filter(|n| !n.is_empty());

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == item.id) {
            line.quantity += 1;
            if let Some(note) = note {
                line.note = Some(note);
            }
            debug!(item_id = %item.id, quantity = line.quantity, "Incremented cart line");
        } else {
            debug!(item_id = %item.id, restaurant_id = %restaurant.id, "Added cart line");
            self.lines.push(CartLine::new(item, restaurant, note));
        }

        self
    }

    /// Add `delta` to the matching line's quantity, clamped at a floor of 0.
    /// A line reaching 0 is removed. Unknown ids are a no-op.
    pub fn update_quantity(mut self, item_id: &str, delta: i32) -> Cart {
        for line in &mut self.lines {
            if line.id == item_id {
                line.quantity = line.quantity.saturating_add_signed(delta);
            }
        }
        self.lines.retain(|line| line.quantity > 0);
        self
    }

    pub fn clear(mut self) -> Cart {
        self.lines.clear();
        self
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
