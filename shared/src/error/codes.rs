//! Unified error codes for Bozor
//!
//! Error codes are organized by category:
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 6xxx: Catalog ====================
    /// Store not found
    StoreNotFound = 6002,
    /// Product not found
    ProductNotFound = 6003,
    /// Catalog file could not be read or parsed
    CatalogLoadFailed = 6101,

    // ==================== 9xxx: System ====================
    /// Storage backend error
    StorageError = 9002,
    /// Configuration error
    ConfigError = 9005,
    /// Persisted state uses an unknown schema version
    SchemaUnsupported = 9401,
    /// Persisted state is damaged
    StorageCorrupted = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // Catalog
            ErrorCode::StoreNotFound => "Store not found",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::CatalogLoadFailed => "Catalog could not be loaded",

            // System
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SchemaUnsupported => "Persisted state version is not supported",
            ErrorCode::StorageCorrupted => "Persisted state is corrupted",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Catalog
            6002 => Ok(ErrorCode::StoreNotFound),
            6003 => Ok(ErrorCode::ProductNotFound),
            6101 => Ok(ErrorCode::CatalogLoadFailed),

            // System
            9002 => Ok(ErrorCode::StorageError),
            9005 => Ok(ErrorCode::ConfigError),
            9401 => Ok(ErrorCode::SchemaUnsupported),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
