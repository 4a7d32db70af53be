//! Shared CLI plumbing: error type, exit codes and catalog/plan loading.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::models::{Configuration, PlanCatalog};

/// Process exit codes used by headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: invalid file contents, tier names or moves
    Validation = 1,
    /// A file could not be read or written
    Io = 2,
}

impl ExitCode {
    /// Numeric value passed to `std::process::exit`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying the exit code to use.
#[derive(Debug)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code
    pub code: ExitCode,
}

impl CliError {
    /// Invalid input (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::Validation,
        }
    }

    /// File system failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration from the config directory.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Resolves the catalog: `--catalog` first, then `paths.catalog` from the
/// config, then the built-in catalog.
pub fn load_catalog(catalog_override: Option<&Path>) -> CliResult<PlanCatalog> {
    let config = if catalog_override.is_some() {
        None
    } else {
        Some(load_config()?)
    };
    let path = catalog_override.or_else(|| config.as_ref()?.paths.catalog.as_deref());

    match path {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::io(format!(
                    "Catalog file not found: {}",
                    path.display()
                )));
            }
            PlanCatalog::load(path).map_err(|e| CliError::validation(format!("{e:#}")))
        }
        None => PlanCatalog::builtin().map_err(|e| CliError::validation(format!("{e:#}"))),
    }
}

/// Reads a plan file. `.json` files are parsed as JSON, anything else as TOML.
pub fn load_plan(path: &Path) -> CliResult<Configuration> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io(format!("Failed to read plan file {}: {e}", path.display()))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| CliError::validation(format!("Invalid plan file {}: {e}", path.display())))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
