//! Recently viewed, compare set, favorites

use super::EcosystemStore;
use crate::ecosystem::events::Namespace;
use shared::models::{COMPARE_LIMIT, RECENTLY_VIEWED_LIMIT, RecentlyViewedEntry};
use shared::types::ItemKind;
use shared::util::now_millis;

impl EcosystemStore {
    /// Push `id` to the front of the kind's history (unique, capped)
    pub fn add_recently_viewed(&mut self, kind: ItemKind, id: &str) {
        let id = id.trim();
        if id.is_empty() {
            return;
        }
        self.update(Namespace::RecentlyViewed, |state, _| {
            let list = state.recently_viewed.list_mut(kind);
            list.retain(|entry| entry.id != id);
            list.insert(
                0,
                RecentlyViewedEntry {
                    id: id.to_string(),
                    at: now_millis(),
                },
            );
            list.truncate(RECENTLY_VIEWED_LIMIT);
        });
    }

    /// Newest first
    pub fn recently_viewed(&self, kind: ItemKind) -> &[RecentlyViewedEntry] {
        self.state.recently_viewed.list(kind)
    }

    /// Flip membership; returns whether `product_id` is now in the set
    pub fn toggle_compare(&mut self, product_id: &str) -> bool {
        let product_id = product_id.trim();
        if product_id.is_empty() {
            return false;
        }
        self.update(Namespace::Compare, |state, _| {
            let ids = &mut state.compare.product_ids;
            if let Some(pos) = ids.iter().position(|id| id == product_id) {
                ids.remove(pos);
                false
            } else {
                ids.insert(0, product_id.to_string());
                ids.truncate(COMPARE_LIMIT);
                true
            }
        })
    }

    pub fn clear_compare(&mut self) {
        self.update(Namespace::Compare, |state, _| {
            state.compare.product_ids.clear();
        });
    }

    pub fn compare_ids(&self) -> &[String] {
        &self.state.compare.product_ids
    }

    /// Flip favorite membership for the current user
    pub fn toggle_favorite(&mut self, kind: ItemKind, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() {
            return false;
        }
        self.update(Namespace::Favorites, |state, user_id| {
            let ids = state
                .favorites
                .by_user_id
                .entry(user_id.to_string())
                .or_default()
                .ids_mut(kind);
            if let Some(pos) = ids.iter().position(|fav| fav == id) {
                ids.remove(pos);
                false
            } else {
                ids.insert(0, id.to_string());
                true
            }
        })
    }

    pub fn is_favorite(&self, kind: ItemKind, id: &str) -> bool {
        self.favorites(kind).iter().any(|fav| fav == id)
    }

    /// Current user's favorites, newest first
    pub fn favorites(&self, kind: ItemKind) -> &[String] {
        self.state
            .favorites
            .by_user_id
            .get(&self.user_id)
            .map(|set| set.ids(kind))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::ecosystem::store::test_support::*;
    use crate::storage::MemoryStorage;
    use shared::types::ItemKind;
    use std::sync::Arc;

    #[test]
    fn test_recently_viewed_caps_at_twelve() {
        let mut store = store();
        for i in 0..13 {
            store.add_recently_viewed(ItemKind::Products, &format!("p{i}"));
        }
        let list = store.recently_viewed(ItemKind::Products);
        assert_eq!(list.len(), 12);
        assert_eq!(list[0].id, "p12");
        assert!(list.iter().all(|e| e.id != "p0"));
        assert!(store.recently_viewed(ItemKind::Stores).is_empty());
    }

    #[test]
    fn test_recently_viewed_moves_repeat_to_front() {
        let mut store = store();
        store.add_recently_viewed(ItemKind::Stores, "s1");
        store.add_recently_viewed(ItemKind::Stores, "s2");
        store.add_recently_viewed(ItemKind::Stores, "s1");

        let ids: Vec<_> = store
            .recently_viewed(ItemKind::Stores)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["s1", "s2"]);
    }

    #[test]
    fn test_recently_viewed_ignores_blank_id() {
        let mut store = store();
        store.add_recently_viewed(ItemKind::Stores, "  ");
        assert!(store.recently_viewed(ItemKind::Stores).is_empty());
        assert_eq!(ItemKind::parse("malls"), None);
    }

    #[test]
    fn test_toggle_compare_round_trip() {
        let mut store = store();
        assert!(store.toggle_compare("p1"));
        assert_eq!(store.compare_ids(), ["p1".to_string()]);
        assert!(!store.toggle_compare("p1"));
        assert!(store.compare_ids().is_empty());
    }

    #[test]
    fn test_compare_keeps_newest_four() {
        let mut store = store();
        for id in ["p1", "p2", "p3", "p4", "p5"] {
            store.toggle_compare(id);
        }
        assert_eq!(store.compare_ids(), ["p5", "p4", "p3", "p2"]);

        store.clear_compare();
        assert!(store.compare_ids().is_empty());
    }

    #[test]
    fn test_favorites_are_per_user() {
        let storage = Arc::new(MemoryStorage::new());
        let mut alice = store_with(storage.clone(), "alice");
        assert!(alice.toggle_favorite(ItemKind::Stores, "s1"));
        assert!(alice.is_favorite(ItemKind::Stores, "s1"));
        assert!(!alice.is_favorite(ItemKind::Products, "s1"));

        let bob = store_with(storage, "bob");
        assert!(bob.favorites(ItemKind::Stores).is_empty());
    }

    #[test]
    fn test_favorite_toggle_round_trip() {
        let mut store = store();
        store.toggle_favorite(ItemKind::Products, "p1");
        store.toggle_favorite(ItemKind::Products, "p2");
        assert_eq!(store.favorites(ItemKind::Products), ["p2", "p1"]);

        assert!(!store.toggle_favorite(ItemKind::Products, "p2"));
        assert_eq!(store.favorites(ItemKind::Products), ["p1"]);
        assert!(!store.toggle_favorite(ItemKind::Products, ""));
    }
}
