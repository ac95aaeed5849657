//! Logging bootstrap.
//!
//! Logs go to rotating files under the application home, never to stdout:
//! stdout belongs to the interactive session. Initialization happens at most
//! once per process and never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "addressbook";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts file logging at `level` in `log_dir`.
///
/// # Errors
/// - the level is not one of trace|debug|info|warn|error
/// - the directory cannot be created
/// - logging was already started in this process
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = normalize_level(level)?;
    if LOGGER.get().is_some() {
        return Err("logging already initialized".to_string());
    }

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    LOGGER
        .set(handle)
        .map_err(|_| "logging already initialized".to_string())?;

    info!(
        "event=app_start module=logging status=ok version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );
    Ok(())
}

/// Flushes buffered log lines. Call before the process exits.
pub fn flush_logging() {
    if let Some(handle) = LOGGER.get() {
        handle.flush();
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_known_levels() {
        assert_eq!(normalize_level(" INFO "), Ok("info"));
        assert_eq!(normalize_level("warning"), Ok("warn"));
        assert_eq!(normalize_level("Trace"), Ok("trace"));
    }

    #[test]
    fn rejects_unknown_level() {
        let err = normalize_level("loud").unwrap_err();
        assert!(err.contains("unsupported log level `loud`"));
    }

    #[test]
    fn init_rejects_bad_level_before_touching_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        assert!(init_logging("shout", &log_dir).is_err());
        assert!(!log_dir.exists());
    }
}
