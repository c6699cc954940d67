//! File logging. The terminal belongs to the UI, so nothing is written to
//! stdout or stderr while it runs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

const LOG_FILE_NAME: &str = "medialib.log";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install a subscriber writing to `<log_dir>/medialib.log`.
///
/// Keep the returned guard alive for the life of the program or buffered
/// lines are lost.
pub fn init(log_dir: &Path, filter: &str) -> Result<WorkerGuard, LoggingError> {
    fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::never(log_dir, LOG_FILE_NAME));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = Registry::default()
        .with(build_env_filter(filter))
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(
        "Logging initialized; log file at {}",
        log_dir.join(LOG_FILE_NAME).display()
    );
    Ok(guard)
}

fn build_env_filter(filter: &str) -> EnvFilter {
    EnvFilter::new(effective_filter(filter))
}

fn effective_filter(filter: &str) -> &str {
    if EnvFilter::try_new(filter).is_ok() {
        filter
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_falls_back_to_info() {
        assert_eq!(effective_filter("medialib=notalevel"), "info");
    }

    #[test]
    fn valid_filter_is_kept() {
        assert_eq!(effective_filter("debug"), "debug");
        assert_eq!(effective_filter("medialib=trace,warn"), "medialib=trace,warn");
    }

    #[test]
    fn unwritable_log_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let err = init(&blocker.join("logs"), "info").unwrap_err();
        assert!(matches!(err, LoggingError::CreateDir { .. }));
    }
}
