//! Pickup Order & Return Models

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Pickup order status
///
/// `ReadyForPickup` → `PickedUp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    ReadyForPickup,
    PickedUp,
}

/// Demo pickup order (reserve in app, collect at the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub store_id: String,
    pub product_ids: Vec<String>,
    pub total: f64,
    pub status: OrderStatus,
    pub pickup_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_up_at: Option<Timestamp>,
}

/// Return request status
///
/// Unknown labels written by other clients survive in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    Requested,
    Approved,
    Rejected,
    Refunded,
    #[serde(untagged)]
    Other(String),
}

/// Return request raised against an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub store_id: String,
    pub product_ids: Vec<String>,
    #[serde(default)]
    pub reason: String,
    pub status: ReturnStatus,
    /// Note left by the store when resolving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create return payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnInput {
    pub order_id: String,
    #[serde(default)]
    pub reason: String,
}

/// Update return payload (last write wins)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPatch {
    pub status: Option<ReturnStatus>,
    pub reason: Option<String>,
    pub resolution: Option<String>,
}

impl ReturnRequest {
    /// Apply a patch, stamping `updated_at`
    pub fn apply_patch(&mut self, patch: ReturnPatch, now: Timestamp) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(reason) = patch.reason {
            self.reason = reason;
        }
        if let Some(resolution) = patch.resolution {
            self.resolution = Some(resolution);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::ReadyForPickup).unwrap(),
            "\"ready_for_pickup\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::PickedUp).unwrap(),
            "\"picked_up\""
        );
    }

    #[test]
    fn test_return_status_accepts_unknown_labels() {
        let status: ReturnStatus = serde_json::from_str("\"awaiting_courier\"").unwrap();
        assert_eq!(status, ReturnStatus::Other("awaiting_courier".to_string()));
        assert_eq!(
            serde_json::to_string(&ReturnStatus::Refunded).unwrap(),
            "\"refunded\""
        );
    }

    #[test]
    fn test_return_patch_is_last_write_wins() {
        let mut ret = ReturnRequest {
            id: "ret_1".to_string(),
            order_id: "ord_1".to_string(),
            user_id: "guest".to_string(),
            store_id: "s1".to_string(),
            product_ids: vec!["p1".to_string()],
            reason: "wrong size".to_string(),
            status: ReturnStatus::Requested,
            resolution: None,
            created_at: 1,
            updated_at: 1,
        };
        ret.apply_patch(
            ReturnPatch {
                status: Some(ReturnStatus::Approved),
                ..Default::default()
            },
            5,
        );
        ret.apply_patch(
            ReturnPatch {
                status: Some(ReturnStatus::Refunded),
                resolution: Some("refunded to card".to_string()),
                ..Default::default()
            },
            9,
        );
        assert_eq!(ret.status, ReturnStatus::Refunded);
        assert_eq!(ret.reason, "wrong size");
        assert_eq!(ret.resolution.as_deref(), Some("refunded to card"));
        assert_eq!(ret.updated_at, 9);
    }
}
