use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use super::StateStore;

// ============================================================================
// JSON File Store
// ============================================================================
//
// One JSON file per key under a base directory, the file-system analogue of
// the browser's keyed local storage. Writes replace the whole record.
//
// ============================================================================

pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `base_dir`, creating the directory if needed.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create store dir {}", base_dir.display()))?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("Corrupt record at {}", path.display()))?;
        Ok(Some(value))
    }

    fn put(&mut self, key: &str, value: Value) -> Result<()> {
        let path = self.path_for(key);
        let raw = serde_json::to_string_pretty(&value)?;
        fs::write(&path, raw).with_context(|| format!("Failed to write {}", path.display()))?;
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
    use uuid::Uuid;

    fn temp_store() -> (JsonFileStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("eats-core-test-{}", Uuid::new_v4()));
        (JsonFileStore::open(&dir).unwrap(), dir)
    }

    #[test]
    fn test_round_trip_through_files() {
        let (mut store, dir) = temp_store();

        assert!(store.get("orders").unwrap().is_none());

        store.put("orders", json!([{"id": "ORD-1"}])).unwrap();
        assert_eq!(
            store.get("orders").unwrap(),
            Some(json!([{"id": "ORD-1"}]))
        );

        // Reopening sees the same records.
        let reopened = JsonFileStore::open(&dir).unwrap();
        assert_eq!(
            reopened.get("orders").unwrap(),
            Some(json!([{"id": "ORD-1"}]))
        );

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_corrupt_record_surfaces_error() {
        let (store, dir) = temp_store();

        fs::write(dir.join("favs.json"), "not json").unwrap();
        assert!(store.get("favs").is_err());

        fs::remove_dir_all(dir).unwrap();
    }
}
