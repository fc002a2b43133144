//! Product Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product entity
///
/// Base products come from the static catalog; custom products share the
/// same shape and live in the ecosystem state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    /// Store reference (not enforced)
    pub store_id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    pub tag: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
}

impl Product {
    /// Apply a patch in place (only fields present in the patch change)
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(v) = &patch.store_id {
            self.store_id = v.clone();
        }
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if let Some(v) = &patch.category {
            self.category = v.clone();
        }
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = &patch.tag {
            self.tag = Some(v.clone());
        }
        if let Some(v) = &patch.brand {
            self.brand = Some(v.clone());
        }
        if let Some(v) = &patch.description {
            self.description = Some(v.clone());
        }
        if let Some(v) = patch.rating {
            self.rating = Some(v);
        }
        if let Some(v) = &patch.images {
            self.images = v.clone();
        }
        if let Some(v) = &patch.specifications {
            self.specifications = v.clone();
        }
    }
}

/// Partial product update (override payload)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
}

impl ProductPatch {
    /// Shallow merge: fields set in `other` win
    pub fn merge(&mut self, other: ProductPatch) {
        if other.store_id.is_some() {
            self.store_id = other.store_id;
        }
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.category.is_some() {
            self.category = other.category;
        }
        if other.price.is_some() {
            self.price = other.price;
        }
        if other.tag.is_some() {
            self.tag = other.tag;
        }
        if other.brand.is_some() {
            self.brand = other.brand;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.rating.is_some() {
            self.rating = other.rating;
        }
        if other.images.is_some() {
            self.images = other.images;
        }
        if other.specifications.is_some() {
            self.specifications = other.specifications;
        }
    }
}

/// Stored override: the accumulated patch plus when it last changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOverride {
    #[serde(flatten)]
    pub patch: ProductPatch,
    pub updated_at: Timestamp,
}
