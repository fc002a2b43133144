//! Feedback Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Feedback handling status
///
/// Starts at `open`; back-office tools may move it to any label, unknown
/// labels are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    #[serde(untagged)]
    Other(String),
}

/// Feedback item left by a shopper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub id: String,
    /// Free-form kind ("bug", "idea", "complaint", ...)
    #[serde(rename = "type", default)]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub email: String,
    pub user_id: String,
    pub status: FeedbackStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create feedback payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackInput {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_kept() {
        let status: FeedbackStatus = serde_json::from_str("\"in_review\"").unwrap();
        assert_eq!(status, FeedbackStatus::Other("in_review".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"in_review\"");

        let status: FeedbackStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, FeedbackStatus::InProgress);
    }
}
