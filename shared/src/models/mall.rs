//! Mall Model

use serde::{Deserialize, Serialize};

/// Operating status declared in the catalog (malls and stores share it)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueStatus {
    #[default]
    Open,
    Closed,
    ComingSoon,
}

/// Geographic position of a mall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Mall entity (reference data, immutable after load)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mall {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: VenueStatus,
    pub rating: Option<f64>,
    #[serde(default)]
    pub store_count: u32,
    pub coordinates: Option<Coordinates>,
    /// Opening hours as written in the catalog, e.g. "10:00 - 22:00"
    pub hours: Option<String>,
    pub image: Option<String>,
}
