//! 核心模块 - 配置和引擎状态
//!
//! - [`Config`] - 环境变量配置
//! - [`Engine`] - catalog + ecosystem store

pub mod config;
pub mod state;

pub use config::{Config, ConfigError};
pub use state::{Engine, MallStatus};
