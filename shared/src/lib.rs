//! Shared types for Bozor
//!
//! Catalog and ecosystem models, the unified error system, and small
//! utilities used by the engine and anything built on top of it.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use types::{GUEST_USER_ID, ItemKind, Timestamp};
