//! Bozor Engine - Samarkand malls marketplace core
//!
//! # 架构概述
//!
//! - **搜索** (`search`): token-AND ranking over malls, stores and products
//! - **生态状态** (`ecosystem`): per-user persisted state (recently viewed,
//!   compare, rewards, orders, returns, feedback, seller access, CMS,
//!   product overrides, favorites, reviews)
//! - **目录** (`catalog`): read-only reference data loaded from JSON
//! - **营业时间** (`hours`): open/closed computation in the business time zone
//! - **存储** (`storage`): key-value backends (memory, redb)
//!
//! # 模块结构
//!
//! ```text
//! bozor-engine/src/
//! ├── core/          # 配置、引擎状态
//! ├── catalog/       # 目录加载
//! ├── search/        # 搜索排序
//! ├── ecosystem/     # 状态、迁移、事件、store 操作
//! ├── storage/       # KeyValueStorage 实现
//! ├── hours.rs       # 营业时间
//! └── utils/         # 日志、时区
//! ```

pub mod catalog;
pub mod core;
pub mod ecosystem;
pub mod hours;
pub mod search;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use catalog::{Catalog, CatalogError};
pub use core::{Config, ConfigError, Engine};
pub use ecosystem::{EcosystemEvent, EcosystemState, EcosystemStore, MigrationError, Namespace};
pub use search::{SearchRequest, SearchResults, SearchScope, search_marketplace};
pub use storage::{KeyValueStorage, MemoryStorage, RedbStorage, StorageError};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
