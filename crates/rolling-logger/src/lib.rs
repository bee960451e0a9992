//! Rolling Logger
//!
//! Installs a tracing subscriber that writes to stderr and to a size-rotated
//! log file, keeping the most recent lines in memory. Records sent through
//! the `log` facade are captured as well.

mod rolling;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use rolling::{LogHandle, RollingConfig};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

static LOGGER: OnceLock<LogHandle> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
    #[error("log file error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger with default rotation settings
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

/// Initialize the global logger.
///
/// Log file: `<log_dir>/<app_name>.log`, rotated to `.log.1 ..= .log.N`.
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: RollingConfig,
) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let handle = LogHandle::open(log_dir.as_ref(), app_name, config)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(LocalTime).with_writer(io::stderr))
        .with(
            fmt::layer()
                .with_timer(LocalTime)
                .with_ansi(false)
                .with_writer(handle.clone()),
        )
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER.set(handle).map_err(|_| LoggerError::AlreadyInitialized)?;
    tracing::info!(target: "rolling_logger", "logging to {}", log_file_path().unwrap_or_default().display());
    Ok(())
}

fn handle() -> Result<&'static LogHandle, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    handle()?;
    tracing::info!(target: "app", "{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), LoggerError> {
    handle()?;
    tracing::warn!(target: "app", "{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    handle()?;
    tracing::error!(target: "app", "{}", message);
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(LogHandle::recent_lines).unwrap_or_default()
}

/// Path of the active log file
pub fn log_file_path() -> Option<PathBuf> {
    LOGGER.get().map(LogHandle::path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_require_init() {
        // The global logger is never installed in unit tests.
        assert!(matches!(info("x"), Err(LoggerError::NotInitialized)));
        assert!(recent_lines().is_empty());
        assert!(log_file_path().is_none());
    }
}
