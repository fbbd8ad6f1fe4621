//! `tracing` subscriber setup shared by the binary and the TUI.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{ChiplistError, Result};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber is installed.
    Off,
}

impl LogTarget {
    /// Pick a target for `config`. A configured file always wins; otherwise
    /// interactive sessions stay silent so log lines never land on the terminal UI.
    pub fn for_session(config: &LoggingConfig, interactive: bool) -> Self {
        match (&config.file, interactive) {
            (Some(path), _) => Self::File(PathBuf::from(path)),
            (None, true) => Self::Off,
            (None, false) => Self::Stderr,
        }
    }
}

/// Build the level filter. `RUST_LOG` takes precedence over `level`.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| ChiplistError::Config(format!("invalid log level '{level}': {e}")))
}

/// Install the global subscriber.
pub fn init(config: &LoggingConfig, target: LogTarget) -> Result<()> {
    let filter = match target {
        LogTarget::Off => return Ok(()),
        _ => env_filter(&config.level)?,
    };

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Off => Ok(()),
    };

    installed.map_err(|e| ChiplistError::Config(format!("logging already initialised: {e}")))
}
