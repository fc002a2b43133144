//! Browsing History Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// How many recently viewed entries are kept per kind
pub const RECENTLY_VIEWED_LIMIT: usize = 12;

/// How many products can be compared side by side
pub const COMPARE_LIMIT: usize = 4;

/// One recently viewed store or product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentlyViewedEntry {
    pub id: String,
    pub at: Timestamp,
}
