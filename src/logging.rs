//! Tracing setup. Diagnostics go to a daily log file so they never interleave
//! with the interactive prompts on the terminal.

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "employee-tracker.log";
const DEFAULT_FILTER: &str = "employee_tracker=info";

/// Installs the global subscriber. Honors `RUST_LOG`, falling back to `info` for this crate.
pub fn init(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .init();

    Ok(())
}
