//! Change notifications
//!
//! Every committed mutation broadcasts one [`EcosystemEvent`]. Sending never
//! blocks; subscribers that fall behind see `RecvError::Lagged`.

use serde::Serialize;
use shared::types::Timestamp;

/// Broadcast channel capacity
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Top-level namespace of the persisted state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Namespace {
    RecentlyViewed,
    Compare,
    Rewards,
    Orders,
    Returns,
    Feedback,
    Cms,
    Seller,
    Catalog,
    Favorites,
    Reviews,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecentlyViewed => "recentlyViewed",
            Self::Compare => "compare",
            Self::Rewards => "rewards",
            Self::Orders => "orders",
            Self::Returns => "returns",
            Self::Feedback => "feedback",
            Self::Cms => "cms",
            Self::Seller => "seller",
            Self::Catalog => "catalog",
            Self::Favorites => "favorites",
            Self::Reviews => "reviews",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 状态变更事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemEvent {
    pub namespace: Namespace,
    pub user_id: String,
    pub at: Timestamp,
}
