//! Tracing setup for the binary.
//!
//! Logs go to stderr and to a daily rolling file under the logs directory.
//! Stdout carries command output only.
//! `RUST_LOG` wins over the `--debug` flag.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "traynote.log";

/// Filter used when `RUST_LOG` is unset.
pub const fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes and
/// stops the file writer. Without a usable log directory only stderr is
/// logged.
pub fn init_tracing(logs_dir: &Path, debug: bool) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let terminal_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .compact();

    let (file_layer, guard) = match std::fs::create_dir_all(logs_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .compact();
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Failed to create log directory {}: {e}", logs_dir.display());
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(terminal_layer)
        .with(file_layer)
        .try_init()
        .ok();

    guard
}
