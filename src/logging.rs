//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the filter from [`Config`] applies.

use crate::Config;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log().filter()))
}

/// Sends logs to the configured file so they don't interfere with the terminal UI.
///
/// # Errors
///
/// Fails if the log file cannot be created.
pub fn init_file(config: &Config) -> std::io::Result<()> {
    let log_file = std::fs::File::create(config.log().file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Sends logs to stderr, leaving stdout for command output.
pub fn init_stderr(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
