//! Ecosystem - client-persisted marketplace state
//!
//! # 模块结构
//!
//! - [`EcosystemStore`] - per-user operations over the persisted state
//! - [`EcosystemState`] - the namespaced, serializable state
//! - [`migrate`](mod@migrate) - schema versions and upgrades
//! - [`EcosystemEvent`] - change notifications

pub mod events;
pub mod migrate;
mod money;
pub mod state;
mod store;

pub use events::{EcosystemEvent, Namespace};
pub use migrate::{CURRENT_SCHEMA_VERSION, MigrationError};
pub use state::EcosystemState;
pub use store::{DEFAULT_STORAGE_KEY, EcosystemStore};
