use crate::ecosystem::DEFAULT_STORAGE_KEY;
use crate::search::DEFAULT_LIMIT;
use crate::utils::time::{DEFAULT_TIMEZONE, parse_timezone};
use chrono_tz::Tz;
use shared::error::{AppError, ErrorCode};
use shared::types::GUEST_USER_ID;
use std::path::PathBuf;
use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown time zone: {0}")]
    InvalidTimezone(String),

    #[error("{name} must be greater than zero")]
    NotPositive { name: &'static str },
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::with_message(ErrorCode::ConfigError, err.to_string())
    }
}

/// 引擎配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_DIR | ./data | 目录, 含 malls.json / stores.json / products.json |
/// | STATE_PATH | ./bozor-state.redb | 状态数据库文件 |
/// | STATE_KEY | bozor.ecosystem | 状态存储键 |
/// | USER_ID | guest | 当前用户 |
/// | SEARCH_LIMIT | 20 | 搜索合并结果上限 |
/// | TIMEZONE | Asia/Samarkand | 营业时区 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录, 未设置时输出到 stderr |
///
/// # 示例
///
/// ```ignore
/// DATA_DIR=/srv/bozor/data USER_ID=u42 bozor search "zara"
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 目录数据
    pub data_dir: PathBuf,
    /// redb 状态文件
    pub state_path: PathBuf,
    pub state_key: String,
    pub user_id: String,
    pub search_limit: usize,
    /// 营业时区
    pub timezone: Tz,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析的数值使用默认值; 未知时区报错
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let timezone_name = var("TIMEZONE", DEFAULT_TIMEZONE);
        let timezone = parse_timezone(&timezone_name)
            .ok_or_else(|| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        let search_limit = var("SEARCH_LIMIT", "")
            .parse()
            .unwrap_or(DEFAULT_LIMIT);
        if search_limit == 0 {
            return Err(ConfigError::NotPositive {
                name: "SEARCH_LIMIT",
            });
        }

        let log_dir = var("LOG_DIR", "");

        Ok(Self {
            data_dir: PathBuf::from(var("DATA_DIR", "./data")),
            state_path: PathBuf::from(var("STATE_PATH", "./bozor-state.redb")),
            state_key: var("STATE_KEY", DEFAULT_STORAGE_KEY),
            user_id: var("USER_ID", GUEST_USER_ID),
            search_limit,
            timezone,
            log_level: var("LOG_LEVEL", "info"),
            log_dir: (!log_dir.is_empty()).then_some(log_dir),
        })
    }
}
