//! Tracing setup: stderr plus a daily rolling file in the logs directory.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_FILE_PREFIX: &str = "brainstorm.log";

/// Filter for stderr: `RUST_LOG` wins, then `--verbose`, then warnings only.
fn console_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Installs the global subscriber. Keep the guard alive until exit so the
/// file writer flushes.
pub fn init(logs_dir: &Path, verbose: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("failed to create log directory {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(console_filter(verbose)),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .with_filter(EnvFilter::new("info")),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(dir = %logs_dir.display(), "logging initialized");
    Ok(guard)
}
