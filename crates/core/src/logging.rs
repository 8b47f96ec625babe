//! Process-wide `tracing` setup shared by every binary of the workspace.
//!
//! Records always go to a daily-rolling file below [`log_dir`]. Console
//! output is opt-in so that the CLI's own status lines stay readable.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const APP_DIR: &str = ".eclipse-plugin-builders";

/// `~/.eclipse-plugin-builders/logs`, or `./.eclipse-plugin-builders/logs`
/// when no home directory is known.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("logs")
}

/// `RUST_LOG` when set and valid, otherwise `fallback`.
fn level_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Routes `tracing` events of this process to `<log_dir>/<component>.<date>`
/// and, with `to_stderr`, to the terminal as well.
///
/// Keep the returned guard alive until exit; dropping it flushes the file
/// writer. A second call in the same process leaves the first subscriber in
/// place.
pub fn init_logging(component: &str, default_level: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("cannot create log directory {}: {}", dir.display(), e);
    }

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));

    let console = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    let installed = tracing_subscriber::registry()
        .with(level_filter(default_level))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(console)
        .try_init();
    if installed.is_err() {
        tracing::debug!("Global subscriber already installed; keeping it");
    }

    guard
}
