//! redb-backed key-value storage
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `kv` | storage key | JSON text | Persisted client state blobs |

use super::{KeyValueStorage, StorageResult};
use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Table for state blobs: key = storage key, value = serialized JSON
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// File-backed storage
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStorage").finish_non_exhaustive()
    }
}

impl RedbStorage {
    /// Open or create the database at the given path
    ///
    /// Commits are persistent as soon as `commit()` returns.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValueStorage for RedbStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_get_set() {
        let storage = RedbStorage::open_in_memory().unwrap();
        assert!(storage.get("bozor.ecosystem").unwrap().is_none());

        storage.set("bozor.ecosystem", r#"{"version":2}"#).unwrap();
        assert_eq!(
            storage.get("bozor.ecosystem").unwrap().as_deref(),
            Some(r#"{"version":2}"#)
        );
    }

    #[test]
    fn test_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.redb");

        {
            let storage = RedbStorage::open(&path).unwrap();
            storage.set("k", "first").unwrap();
            storage.set("k", "second").unwrap();
        }

        let storage = RedbStorage::open(&path).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));
    }
}
