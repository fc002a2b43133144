use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use shared::error::AppResult;
use shared::models::VenueStatus;

use crate::catalog::Catalog;
use crate::core::Config;
use crate::ecosystem::EcosystemStore;
use crate::hours::{OpeningHours, effective_status};
use crate::search::{SearchRequest, SearchResults, SearchScope, search_marketplace};
use crate::storage::{KeyValueStorage, RedbStorage};

/// A mall's live status as shown to shoppers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MallStatus {
    pub id: String,
    pub name: String,
    pub declared: VenueStatus,
    pub effective: VenueStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closes_in_minutes: Option<u32>,
}

/// 引擎状态 - catalog, ecosystem store and configuration
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<Catalog> | 只读目录数据 |
/// | store | EcosystemStore | 当前用户的持久化状态 |
#[derive(Debug)]
pub struct Engine {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub store: EcosystemStore,
}

impl Engine {
    /// Load the catalog from `DATA_DIR` and open the redb state file
    pub fn initialize(config: Config) -> AppResult<Self> {
        let catalog = Arc::new(Catalog::load_dir(&config.data_dir)?);
        let storage = Arc::new(RedbStorage::open(&config.state_path)?);
        tracing::info!(path = %config.state_path.display(), "🗄️ State database opened");
        Ok(Self::with_parts(config, catalog, storage))
    }

    /// Assemble from already-built parts
    pub fn with_parts(
        config: Config,
        catalog: Arc<Catalog>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        let store = EcosystemStore::open(
            storage,
            catalog.clone(),
            config.user_id.as_str(),
            config.state_key.as_str(),
        );
        Self {
            config,
            catalog,
            store,
        }
    }

    /// Search the effective catalog (overrides and custom products included)
    ///
    /// Results borrow the product list built for this call, so they are
    /// handed to `render` instead of returned.
    pub fn search<R>(
        &self,
        query: &str,
        scope: SearchScope,
        render: impl FnOnce(SearchResults<'_>) -> R,
    ) -> R {
        let products = self.store.all_products();
        let results = search_marketplace(&SearchRequest {
            query,
            scope,
            malls: self.catalog.malls(),
            stores: self.catalog.stores(),
            products: &products,
            limit: self.config.search_limit,
        });
        render(results)
    }

    /// Open/closed status of every mall at `now`
    pub fn mall_statuses(&self, now: DateTime<Tz>) -> Vec<MallStatus> {
        self.catalog
            .malls()
            .iter()
            .map(|mall| {
                let effective = effective_status(mall.status, mall.hours.as_deref(), now);
                let closes_in_minutes = match effective {
                    VenueStatus::Open => mall
                        .hours
                        .as_deref()
                        .and_then(OpeningHours::parse)
                        .and_then(|h| h.minutes_until_close(now.time())),
                    _ => None,
                };
                MallStatus {
                    id: mall.id.clone(),
                    name: mall.name.clone(),
                    declared: mall.status,
                    effective,
                    hours: mall.hours.clone(),
                    closes_in_minutes,
                }
            })
            .collect()
    }
}
