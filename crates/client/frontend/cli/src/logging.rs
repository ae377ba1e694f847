//! File-only tracing setup so log lines never land on the dashboard.
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "awaken.log";

/// Install the global subscriber writing to `<cache dir>/logs/awaken.log`.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// whole process.
pub fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // File layer only: stderr would tear the TUI.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(guard)
}

/// Platform cache directory for logs, or the temp dir when none is known.
pub fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "awaken")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("awaken").join("logs"))
}
