use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;

use super::StateStore;

// ============================================================================
// In-Memory Store
// ============================================================================

/// Volatile store for tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> Result<()> {
        self.records.insert(key.to_string(), value);
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_then_get() {
        let mut store = MemoryStore::new();

        assert!(store.get("missing").unwrap().is_none());

        store.put("favs", json!(["supreme"])).unwrap();
        assert_eq!(store.get("favs").unwrap(), Some(json!(["supreme"])));

        store.put("favs", json!([])).unwrap();
        assert_eq!(store.get("favs").unwrap(), Some(json!([])));
    }
}
