//! File logging for the terminal binary.
//!
//! The renderer owns stdout while a game is running, so log output goes to a
//! file instead. Logging stays off unless a path is configured.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber writing to `log_path`.
///
/// Returns `None` when no path is given. The returned guard flushes pending
/// lines on drop and must outlive the game loop.
pub fn init(log_path: Option<&str>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_path else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(path))
        .with_context(|| format!("failed to open log file {path}"))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(Some(guard))
}
