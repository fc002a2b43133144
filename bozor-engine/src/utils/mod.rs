//! 工具模块 - logging and time helpers

pub mod logger;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCode};
