//! Tracing setup

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "wordle_game=info";

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber is installed
    Disabled,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(env_filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        LogTarget::Disabled => {}
    }
    Ok(())
}
