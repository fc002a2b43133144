//! Common types for the shared crate
//!
//! Small aliases and enums used by both the models and the engine.

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Partition key used when no user is signed in
pub const GUEST_USER_ID: &str = "guest";

/// Kinds of catalog item a shopper can view or favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Stores,
    Products,
}

impl ItemKind {
    /// Parse the wire name (`stores` / `products`)
    ///
    /// Anything else yields `None`; callers treat that as a no-op.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "stores" => Some(Self::Stores),
            "products" => Some(Self::Products),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stores => "stores",
            Self::Products => "products",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
