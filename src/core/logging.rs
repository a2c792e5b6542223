//! Logging setup for TUI mode.
//!
//! The terminal belongs to ratatui while the portal runs, so logs only go to a
//! daily-rolling JSON file under the app data directory. `log` macros used
//! across the crate are bridged into `tracing` by `LogTracer`.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log file name prefix; `tracing-appender` appends the date.
pub const LOG_FILE_NAME: &str = "covershelf.log";

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Directory holding the rolling log files.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("covershelf").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize file-only logging and the miette report hook.
///
/// Returns a `WorkerGuard` that must be kept alive for the whole session so
/// buffered lines are flushed on shutdown.
pub fn init_tui() -> WorkerGuard {
    let log_dir = log_dir();

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    // No stdout layer; the TUI owns the terminal
    tracing_subscriber::registry().with(file_layer).init();

    // Usually already installed by the registry's tracing-log feature.
    if tracing_log::LogTracer::init().is_ok() {
        log::debug!("LogTracer installed explicitly");
    }

    init_miette();

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );

    guard
}

/// Report fatal startup errors (bad catalog, terminal failures) with miette.
fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .ok(); // Ignore if already set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_app_scoped() {
        let dir = log_dir();
        assert!(dir.ends_with("logs"));
        assert!(dir.to_string_lossy().contains("covershelf") || dir == PathBuf::from("logs"));
    }
}
