//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to
//! `<log_dir>/<app_name>.log`, rotates the file at a size limit, and keeps
//! the most recent lines in memory so they can be shown without reading the
//! file back. Records emitted through the `log` facade are bridged in.
//!
//! ```no_run
//! rolling_logger::init_logger("/tmp/logs", "VoiceCart").unwrap();
//! let _ = rolling_logger::info("started");
//! ```

mod file;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use file::RollingConfig;
use file::{RollingFile, SharedWriter};

static LOGGER: OnceLock<SharedWriter> = OnceLock::new();

/// Logger setup errors
#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    AlreadyInitialized(String),
    NotInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize with default limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

/// Initialize the global subscriber.
///
/// Level filtering follows `RUST_LOG`, defaulting to `info`. Fails if a
/// global subscriber is already installed.
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: RollingConfig,
) -> Result<(), LoggerError> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;

    let echo_stderr = config.echo_stderr;
    let writer = SharedWriter::new(RollingFile::open(log_dir, app_name, config)?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_timer(LocalTime);
    let stderr_layer = echo_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(LocalTime)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    let path = writer.path();
    LOGGER
        .set(writer)
        .map_err(|_| LoggerError::AlreadyInitialized("rolling writer already set".to_string()))?;

    log::info!("{} logging to {}", app_name, path.display());
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    LOGGER.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Last `n` formatted lines, oldest first, including lines left in the
/// file by earlier runs. Empty before initialization.
pub fn recent_lines(n: usize) -> Vec<String> {
    LOGGER.get().map(|writer| writer.recent(n)).unwrap_or_default()
}

/// Path of the active log file
pub fn log_file_path() -> Option<PathBuf> {
    LOGGER.get().map(|writer| writer.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_require_initialization() {
        // No test in this crate installs the global logger
        assert!(matches!(info("nothing"), Err(LoggerError::NotInitialized)));
        assert!(recent_lines(10).is_empty());
        assert!(log_file_path().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::AlreadyInitialized("twice".to_string());
        assert_eq!(err.to_string(), "Logger already initialized: twice");
        let io_err: LoggerError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(io_err.to_string().starts_with("Log file error"));
    }
}
