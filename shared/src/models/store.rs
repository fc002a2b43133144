//! Store Model

use super::mall::VenueStatus;
use serde::{Deserialize, Serialize};

/// Store entity (reference data, belongs to a mall)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    /// Mall reference (not enforced)
    pub mall_id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub status: VenueStatus,
    pub floor: Option<String>,
    pub hours: Option<String>,
    #[serde(default)]
    pub has_promo: bool,
    pub promo_title: Option<String>,
    pub promo_description: Option<String>,
    /// Discount in percent
    pub promo_discount: Option<u32>,
    pub logo: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}
