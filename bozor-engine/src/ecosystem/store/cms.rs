use super::EcosystemStore;
use crate::ecosystem::events::Namespace;
use serde_json::{Map, Value};
use shared::models::CmsPage;
use shared::util::now_millis;

impl EcosystemStore {
    pub fn cms_page(&self, slug: &str) -> Option<&CmsPage> {
        self.state.cms.pages.get(slug)
    }

    /// Replace the page stored under `slug` (last write wins)
    pub fn upsert_cms_page(&mut self, slug: &str, fields: Map<String, Value>) -> Option<CmsPage> {
        let slug = slug.trim();
        if slug.is_empty() {
            return None;
        }
        let page = CmsPage::new(fields, now_millis());
        self.update(Namespace::Cms, |state, _| {
            state.cms.pages.insert(slug.to_string(), page.clone());
        });
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use crate::ecosystem::store::test_support::*;
    use serde_json::{Map, Value, json};

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = store();
        assert!(store.cms_page("about").is_none());

        store.upsert_cms_page("about", fields(json!({"title": "About", "body": "v1"})));
        store.upsert_cms_page("about", fields(json!({"title": "About us"})));

        let page = store.cms_page("about").unwrap();
        assert_eq!(page.title(), Some("About us"));
        assert!(!page.fields.contains_key("body"));
    }

    #[test]
    fn test_blank_slug_ignored() {
        let mut store = store();
        assert!(store.upsert_cms_page(" ", Map::new()).is_none());
        assert!(store.state().cms.pages.is_empty());
    }
}
