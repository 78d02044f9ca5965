//! File logging with `tracing`.
//!
//! The terminal belongs to the UI, so diagnostics go to a file or nowhere.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to `path`.
///
/// `RUST_LOG` takes precedence over `level`. Returns `None` when `path` is
/// `None` or a subscriber is already installed. Keep the guard alive until
/// exit so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if `path` has no file name, its directory cannot be
/// created, or `level` is not a valid filter.
pub fn init_logging(path: Option<&Path>, level: &str) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level {level:?}"))?,
    };

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    // Another subscriber won; dropping the guard shuts this writer down.
    Ok(installed.is_ok().then_some(guard))
}
