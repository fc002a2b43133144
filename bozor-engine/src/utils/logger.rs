//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence over the configured level when set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Log file prefix inside the log directory
const LOG_FILE_PREFIX: &str = "bozor";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional daily-rolling file output
///
/// Falls back to stderr when `log_dir` does not exist.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            // 文件输出不需要颜色
            let _ = subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init();
            return;
        }
    }

    // stdout carries command output
    let _ = subscriber.with_writer(std::io::stderr).try_init();
}
