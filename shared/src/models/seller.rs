//! Seller Access Models

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Seller request status
///
/// `Pending` → `Approved` | `Rejected`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerStatus {
    Pending,
    Approved,
    Rejected,
}

/// A user asking to manage a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRequest {
    pub id: String,
    pub user_id: String,
    pub store_id: String,
    pub status: SellerStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Stores a user has been approved to manage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerApproval {
    pub store_ids: Vec<String>,
    pub approved_at: Timestamp,
}
