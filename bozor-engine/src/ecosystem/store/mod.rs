//! EcosystemStore - per-user marketplace state over a key-value backend
//!
//! # 更新流程
//!
//! ```text
//! mutation ──▶ clone state ──▶ apply ──▶ replace ──▶ persist ──▶ broadcast
//!                                                      │
//!                                              (failure: warn only)
//! ```
//!
//! Operations never return errors. Missing input or an unknown referenced
//! entity yields `None`/`false` and leaves the state untouched.

mod browsing;
mod catalog;
mod cms;
mod feedback;
mod orders;
mod reviews;
mod rewards;
mod seller;

use super::events::{EVENT_CHANNEL_CAPACITY, EcosystemEvent, Namespace};
use super::migrate;
use super::state::EcosystemState;
use crate::catalog::Catalog;
use crate::storage::KeyValueStorage;
use shared::types::GUEST_USER_ID;
use shared::util::now_millis;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "bozor.ecosystem";

pub struct EcosystemStore {
    storage: Arc<dyn KeyValueStorage>,
    catalog: Arc<Catalog>,
    user_id: String,
    storage_key: String,
    state: EcosystemState,
    events: broadcast::Sender<EcosystemEvent>,
}

impl std::fmt::Debug for EcosystemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcosystemStore")
            .field("user_id", &self.user_id)
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

impl EcosystemStore {
    /// Load persisted state for `storage_key`
    ///
    /// A blank `user_id` means the guest user. Unreadable, malformed or
    /// newer-than-supported state is logged and replaced by the default; a
    /// single bad namespace only resets that namespace.
    pub fn open(
        storage: Arc<dyn KeyValueStorage>,
        catalog: Arc<Catalog>,
        user_id: impl Into<String>,
        storage_key: impl Into<String>,
    ) -> Self {
        let user_id = user_id.into().trim().to_string();
        let user_id = if user_id.is_empty() {
            GUEST_USER_ID.to_string()
        } else {
            user_id
        };
        let storage_key = storage_key.into();
        let state = load_state(storage.as_ref(), &storage_key);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        tracing::info!(user_id = %user_id, key = %storage_key, "Ecosystem store opened");

        Self {
            storage,
            catalog,
            user_id,
            storage_key,
            state,
            events,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current state snapshot
    pub fn state(&self) -> &EcosystemState {
        &self.state
    }

    /// Receive one event per committed mutation
    pub fn subscribe(&self) -> broadcast::Receiver<EcosystemEvent> {
        self.events.subscribe()
    }

    /// Copy-on-write commit of an unconditional change
    fn update<R>(
        &mut self,
        namespace: Namespace,
        apply: impl FnOnce(&mut EcosystemState, &str) -> R,
    ) -> R {
        let mut next = self.state.clone();
        let out = apply(&mut next, &self.user_id);
        self.commit(namespace, next);
        out
    }

    /// Commit only when `apply` returns `Some`
    fn try_update<R>(
        &mut self,
        namespace: Namespace,
        apply: impl FnOnce(&mut EcosystemState, &str) -> Option<R>,
    ) -> Option<R> {
        let mut next = self.state.clone();
        let out = apply(&mut next, &self.user_id)?;
        self.commit(namespace, next);
        Some(out)
    }

    fn commit(&mut self, namespace: Namespace, next: EcosystemState) {
        self.state = next;
        self.persist();
        tracing::debug!(namespace = %namespace, user_id = %self.user_id, "Ecosystem state updated");
        // no receivers is fine
        let _ = self.events.send(EcosystemEvent {
            namespace,
            user_id: self.user_id.clone(),
            at: now_millis(),
        });
    }

    fn persist(&self) {
        let blob = match migrate::encode(&self.state) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize ecosystem state");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.storage_key, &blob) {
            tracing::warn!(
                error = %e,
                key = %self.storage_key,
                "Failed to persist ecosystem state"
            );
        }
    }
}

fn load_state(storage: &dyn KeyValueStorage, key: &str) -> EcosystemState {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return EcosystemState::default(),
        Err(e) => {
            tracing::warn!(error = %e, key, "Failed to read ecosystem state, starting empty");
            return EcosystemState::default();
        }
    };
    migrate::decode(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, key, "Discarding unreadable ecosystem state");
        EcosystemState::default()
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::storage::MemoryStorage;
    use shared::models::{Mall, Product, Store};

    pub fn catalog() -> Arc<Catalog> {
        let malls: Vec<Mall> = serde_json::from_value(serde_json::json!([
            {"id": "m1", "name": "Festival Mall", "location": "Registan"}
        ]))
        .unwrap();
        let stores: Vec<Store> = serde_json::from_value(serde_json::json!([
            {"id": "s1", "mallId": "m1", "name": "Zara Store", "category": "Fashion"},
            {"id": "s2", "mallId": "m1", "name": "Silk Road Books", "category": "Books"}
        ]))
        .unwrap();
        let products: Vec<Product> = serde_json::from_value(serde_json::json!([
            {"id": "p1", "storeId": "s1", "name": "Linen Shirt", "price": 250000.0},
            {"id": "p2", "storeId": "s1", "name": "Atlas Scarf", "price": 120000.5},
            {"id": "p3", "storeId": "s2", "name": "Navoi Poems", "price": 45000.0}
        ]))
        .unwrap();
        Arc::new(Catalog::new(malls, stores, products))
    }

    pub fn store_with(storage: Arc<MemoryStorage>, user_id: &str) -> EcosystemStore {
        EcosystemStore::open(storage, catalog(), user_id, DEFAULT_STORAGE_KEY)
    }

    pub fn store() -> EcosystemStore {
        store_with(Arc::new(MemoryStorage::new()), "guest")
    }
}
