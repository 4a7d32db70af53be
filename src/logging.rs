//! Tracing setup.
//!
//! The interactive board owns the terminal, so it logs to a file under the
//! config directory. Headless commands log to stderr. In both cases the
//! filter comes from `PLAN_CONFIGURATOR_LOG` when set, otherwise from the
//! verbosity flag.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::{APP_BINARY_NAME, LOG_ENV_VAR};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for headless commands
    Stderr,
    /// Append to a file, for the interactive board
    File(PathBuf),
}

/// Default log file of the interactive board.
pub fn default_log_file() -> Result<PathBuf> {
    Ok(Config::config_dir()?
        .join("logs")
        .join(format!("{APP_BINARY_NAME}.log")))
}

/// Filter used when `PLAN_CONFIGURATOR_LOG` is unset or invalid.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| default_directive(verbose).into())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Installs the global subscriber.
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let filter = env_filter(verbose);

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
        }
    };

    if installed.is_ok() {
        tracing::debug!(?target, "logging initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
