//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV_VAR};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Custom catalog file; the built-in catalog is used when unset
    pub catalog: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    #[serde(default = "default_true")]
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Show the secondary payment box under each column
    #[serde(default = "default_true")]
    pub show_footer_totals: bool,
    /// Offer the save control (and the summary it produces)
    #[serde(default = "default_true")]
    pub show_save_button: bool,
    /// Offer the reset control
    #[serde(default = "default_true")]
    pub show_reset_button: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
            show_footer_totals: true,
            show_save_button: true,
            show_reset_button: true,
        }
    }
}

/// Delays for transient effects, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Highlight on a freshly dropped card
    pub card_highlight_ms: u64,
    /// Emphasis on an updated price display
    pub price_emphasis_ms: u64,
    /// How long a toast stays before fading
    pub toast_ms: u64,
    /// Fade-out time before a toast is removed
    pub toast_fade_ms: u64,
    /// Busy time of the save control before the summary appears
    pub save_delay_ms: u64,
    /// Busy time of the reset control after a confirmed reset
    pub reset_settle_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            card_highlight_ms: 1000,
            price_emphasis_ms: 700,
            toast_ms: 3000,
            toast_fade_ms: 300,
            save_delay_ms: 600,
            reset_settle_ms: 600,
        }
    }
}

impl TimingConfig {
    /// Highlight duration for dropped cards.
    #[must_use]
    pub const fn card_highlight(&self) -> Duration {
        Duration::from_millis(self.card_highlight_ms)
    }

    /// Emphasis duration for price displays.
    #[must_use]
    pub const fn price_emphasis(&self) -> Duration {
        Duration::from_millis(self.price_emphasis_ms)
    }

    /// Visible time of a toast before it fades.
    #[must_use]
    pub const fn toast(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    /// Fade-out time of a toast.
    #[must_use]
    pub const fn toast_fade(&self) -> Duration {
        Duration::from_millis(self.toast_fade_ms)
    }

    /// Save control busy time.
    #[must_use]
    pub const fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }

    /// Reset control busy time.
    #[must_use]
    pub const fn reset_settle(&self) -> Duration {
        Duration::from_millis(self.reset_settle_ms)
    }

    fn validate(&self) -> Result<()> {
        let named = [
            ("card_highlight_ms", self.card_highlight_ms),
            ("price_emphasis_ms", self.price_emphasis_ms),
            ("toast_ms", self.toast_ms),
            ("toast_fade_ms", self.toast_fade_ms),
            ("save_delay_ms", self.save_delay_ms),
            ("reset_settle_ms", self.reset_settle_ms),
        ];
        for (name, value) in named {
            if value == 0 {
                anyhow::bail!("timing.{name} must be greater than zero");
            }
            if value > 60_000 {
                anyhow::bail!("timing.{name} must be at most 60000 ms, got {value}");
            }
        }
        Ok(())
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PlanConfigurator/config.toml`
/// - macOS: `~/Library/Application Support/PlanConfigurator/config.toml`
/// - Windows: `%APPDATA%\PlanConfigurator\config.toml`
///
/// # Validation
///
/// - `paths.catalog` must point at an existing file when set
/// - every `timing` value must be between 1 and 60000 ms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Transient effect delays
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// `PLAN_CONFIGURATOR_CONFIG_DIR` overrides the platform location.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV_VAR).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.paths.catalog {
            if !catalog.is_file() {
                anyhow::bail!("Catalog file does not exist: {}", catalog.display());
            }
        }

        self.timing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.catalog, None);
        assert!(config.ui.show_help_on_startup);
        assert!(config.ui.show_footer_totals);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.timing.card_highlight_ms, 1000);
        assert_eq!(config.timing.price_emphasis(), Duration::from_millis(700));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[ui]\nshow_help_on_startup = false\ntheme_mode = \"Light\"\n\n[timing]\ntoast_ms = 5000\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.ui.show_help_on_startup);
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert!(config.ui.show_reset_button);
        assert_eq!(config.timing.toast_ms, 5000);
        assert_eq!(config.timing.toast_fade_ms, 300);
    }

    #[test]
    fn test_validate_catalog_path() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = temp_dir.path().join("catalog.toml");

        let mut config = Config::new();
        config.paths.catalog = Some(catalog.clone());
        assert!(config.validate().is_err());

        fs::write(&catalog, "base_payment = 1.0\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timing() {
        let mut config = Config::new();
        config.timing.save_delay_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("save_delay_ms"));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.show_footer_totals = false;
        config.timing.toast_fade_ms = 450;
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
