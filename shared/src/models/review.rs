//! Product Review Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Lowest accepted star rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating
pub const MAX_RATING: u8 = 5;

/// Review left on a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: Timestamp,
}

/// Create review payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    pub product_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}
