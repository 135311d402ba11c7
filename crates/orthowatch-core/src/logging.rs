//! Logging bootstrap.
//!
//! The TUI owns the terminal, so logs go to daily-rotated files under
//! `<ORTHOWATCH_HOME>/logs`. Filtering comes from `ORTHOWATCH_LOG`
//! (standard `EnvFilter` syntax), defaulting to `info`.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

const LOG_ENV_VAR: &str = "ORTHOWATCH_LOG";
const LOG_FILE_PREFIX: &str = "orthowatch.log";

/// Initializes the global tracing subscriber with a non-blocking file writer.
///
/// The returned guard must be held for the lifetime of the process; dropping
/// it flushes and stops the background writer.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(guard)
}
