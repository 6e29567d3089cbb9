use anyhow::Result;
use serde_json::Value;

// ============================================================================
// State Store - Session Persistence Boundary
// ============================================================================
//
// The session's durable outputs (favorites, order history) are plain JSON
// records behind fixed string keys, reloaded verbatim at session start.
// There is no schema versioning: a record that no longer deserializes is
// the persistence layer's problem, not the core's.
//
// ============================================================================

/// Key under which the favorites list is persisted.
pub const FAVORITES_KEY: &str = "venkatagiri_favs";
/// Key under which the order history is persisted.
pub const ORDERS_KEY: &str = "venkatagiri_orders";

/// Narrow key/value interface the session persists through. Implementations
/// own all storage mechanics; the core only reads and writes JSON values
/// synchronously.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn put(&mut self, key: &str, value: Value) -> Result<()>;
}

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
