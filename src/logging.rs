use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive, e.g. `shoplist=debug`
pub const LOG_ENV: &str = "SHOPLIST_LOG";

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install log subscriber: {0}")]
    InitError(#[from] TryInitError),
}

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Append to a file. The only option while the TUI owns the terminal.
    File(&'a Path),
    /// Write to stderr (CLI subcommands)
    Stderr,
    Off,
}

impl LogTarget<'_> {
    fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::File(_) => "info",
            // stderr is shared with command output; keep it quiet
            LogTarget::Stderr => "error",
            LogTarget::Off => "off",
        }
    }
}

fn filter_for(target: LogTarget<'_>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(target.default_directive()))
}

/// Install the global subscriber. Call once, before any work.
pub fn init(target: LogTarget<'_>) -> Result<(), LogError> {
    let filter = filter_for(target);
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LogError::OpenError {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
    }
    Ok(())
}
