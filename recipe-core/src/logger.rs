//! Logging Infrastructure
//!
//! Structured logging setup: stdout by default, daily rolling files when a
//! log directory is configured.

use std::path::Path;

use shared::error::{AppError, AppResult};

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "recipe-core";

/// Initialize the logger at `info`
pub fn init_logger() -> AppResult<()> {
    init_logger_with_file(None, None)
}

/// Initialize the logger with an optional level and file output.
///
/// Unknown level names fall back to `info`. Fails when a global subscriber
/// is already installed.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> AppResult<()> {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let installed = match log_dir.map(Path::new).filter(|dir| dir.is_dir()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            subscriber.with_writer(file_appender).try_init()
        }
        None => subscriber.try_init(),
    };

    installed.map_err(|e| AppError::config(format!("failed to install logger: {}", e)))
}
