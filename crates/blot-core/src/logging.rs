//! File logging setup.
//!
//! Logs go to `${BLOT_HOME}/logs/blot.log`. The TUI owns the terminal via
//! the alternate screen, so nothing may log to stdout/stderr while it runs;
//! everything is routed to the log file instead.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Log filename inside the logs directory.
const LOG_FILE: &str = "blot.log";

/// Initializes file logging and returns the writer guard.
///
/// The guard must be kept alive for the duration of the process; dropping
/// it flushes and stops the background writer.
///
/// Filtering is controlled by `BLOT_LOG` (EnvFilter syntax), defaulting to
/// `info`.
///
/// # Errors
/// Returns an error if the logs directory cannot be created.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("BLOT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
