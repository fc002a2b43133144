//! Key-value storage for persisted client state
//!
//! The ecosystem store only ever needs `get`/`set` by string key, the same
//! contract a browser's local storage offers. Backends:
//!
//! | Backend | Durability | Use |
//! |---------|------------|-----|
//! | [`MemoryStorage`] | none | tests, throwaway sessions |
//! | [`RedbStorage`] | redb file (copy-on-write commits) | the `bozor` binary |

mod memory;
mod redb_storage;

pub use memory::MemoryStorage;
pub use redb_storage::RedbStorage;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::with_message(ErrorCode::StorageError, err.to_string())
    }
}

/// String key-value store (the only I/O boundary of the ecosystem store)
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
