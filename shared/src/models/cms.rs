//! CMS Page Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Editable content page keyed by slug
///
/// Page body is free-form JSON; only `updatedAt` is owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsPage {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub updated_at: Timestamp,
}

impl CmsPage {
    pub fn new(mut fields: Map<String, Value>, updated_at: Timestamp) -> Self {
        fields.remove("updatedAt");
        Self { fields, updated_at }
    }

    /// Convenience accessor for the conventional `title` field
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_drops_caller_timestamp() {
        let fields = json!({"title": "About", "updatedAt": 1})
            .as_object()
            .cloned()
            .unwrap();
        let page = CmsPage::new(fields, 77);
        assert_eq!(page.title(), Some("About"));
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"title": "About", "updatedAt": 77})
        );
    }
}
