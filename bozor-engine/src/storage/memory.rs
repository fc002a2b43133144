use super::{KeyValueStorage, StorageResult};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Process-local storage, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key (e.g. with a blob written by an older app version)
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.entries.write().insert(key.into(), value.into());
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.get("nope").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_set_replaces_value() {
        let storage = MemoryStorage::with_entry("k", "v1");
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);
    }
}
