//! Persisted ecosystem state
//!
//! One JSON blob per storage key. Every namespace defaults independently, so a
//! blob missing a namespace (or holding `null` there) still loads.
//!
//! ```text
//! {
//!   version: 2,
//!   recentlyViewed: { stores: [{id, at}], products: [{id, at}] },
//!   compare:        { productIds: [..] },
//!   rewards:        { pointsByUserId, lastRewardByUserId, awardedKeysByUserId },
//!   orders:         { items: [Order] },
//!   returns:        { items: [ReturnRequest] },
//!   feedback:       { items: [FeedbackItem] },
//!   cms:            { pages: { slug: {..fields, updatedAt} } },
//!   seller:         { requests: [SellerRequest], approvalsByUserId },
//!   catalog:        { productOverridesById, customProducts: [Product] },
//!   favorites:      { byUserId: { uid: {storeIds, productIds} } },
//!   reviews:        { items: [Review] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use shared::models::{
    CmsPage, FeedbackItem, Order, Product, ProductOverride, RecentlyViewedEntry, ReturnRequest,
    Review, RewardEntry, SellerApproval, SellerRequest,
};
use shared::types::ItemKind;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EcosystemState {
    pub recently_viewed: RecentlyViewedState,
    pub compare: CompareState,
    pub rewards: RewardsState,
    pub orders: OrdersState,
    pub returns: ReturnsState,
    pub feedback: FeedbackState,
    pub cms: CmsState,
    pub seller: SellerState,
    pub catalog: CatalogState,
    pub favorites: FavoritesState,
    pub reviews: ReviewsState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentlyViewedState {
    pub stores: Vec<RecentlyViewedEntry>,
    pub products: Vec<RecentlyViewedEntry>,
}

impl RecentlyViewedState {
    pub fn list(&self, kind: ItemKind) -> &[RecentlyViewedEntry] {
        match kind {
            ItemKind::Stores => &self.stores,
            ItemKind::Products => &self.products,
        }
    }

    pub fn list_mut(&mut self, kind: ItemKind) -> &mut Vec<RecentlyViewedEntry> {
        match kind {
            ItemKind::Stores => &mut self.stores,
            ItemKind::Products => &mut self.products,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompareState {
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardsState {
    pub points_by_user_id: BTreeMap<String, u64>,
    pub last_reward_by_user_id: BTreeMap<String, RewardEntry>,
    /// Keys already redeemed through `award_points_once`
    pub awarded_keys_by_user_id: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersState {
    pub items: Vec<Order>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnsState {
    pub items: Vec<ReturnRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackState {
    pub items: Vec<FeedbackItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsState {
    pub pages: BTreeMap<String, CmsPage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerState {
    pub requests: Vec<SellerRequest>,
    pub approvals_by_user_id: BTreeMap<String, SellerApproval>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogState {
    pub product_overrides_by_id: BTreeMap<String, ProductOverride>,
    pub custom_products: Vec<Product>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoritesState {
    pub by_user_id: BTreeMap<String, FavoriteSet>,
}

/// 收藏 - one user's favorite stores and products, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoriteSet {
    pub store_ids: Vec<String>,
    pub product_ids: Vec<String>,
}

impl FavoriteSet {
    pub fn ids(&self, kind: ItemKind) -> &[String] {
        match kind {
            ItemKind::Stores => &self.store_ids,
            ItemKind::Products => &self.product_ids,
        }
    }

    pub fn ids_mut(&mut self, kind: ItemKind) -> &mut Vec<String> {
        match kind {
            ItemKind::Stores => &mut self.store_ids,
            ItemKind::Products => &mut self.product_ids,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsState {
    pub items: Vec<Review>,
}
