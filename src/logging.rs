//! Log subscriber setup. The terminal belongs to the UI, so logs only ever
//! go to a file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Build the event filter. `RUST_LOG` takes precedence over `directive`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
        directive: directive.to_string(),
        source,
    })
}

/// Open `path` for appending, never rotated.
fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|source| LoggingError::FileOpen {
            path: path.to_path_buf(),
            source,
        })
}

/// Install the global subscriber writing to `file_override` or the configured
/// file. Returns `Ok(None)` when no destination is configured; otherwise the
/// returned guard must be held until exit so buffered lines get flushed.
pub fn init_logging(
    config: &LoggingConfig,
    file_override: Option<&Path>,
) -> Result<Option<WorkerGuard>, LoggingError> {
    let Some(path) = file_override.or(config.file.as_deref()) else {
        return Ok(None);
    };

    let filter = build_filter(&config.level)?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok(Some(guard))
}
