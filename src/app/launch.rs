use std::path::Path;

use anyhow::{Context, Result};

use super::{Configurator, Controls};
use crate::{config, models, tui};

/// Loads the catalog and builds a configurator showing its default plan.
///
/// `catalog_override` wins over `paths.catalog` from the config; with
/// neither set the built-in catalog is used.
pub fn build_configurator(
    config: &config::Config,
    catalog_override: Option<&Path>,
) -> Result<Configurator> {
    let catalog_path = catalog_override.or(config.paths.catalog.as_deref());
    let catalog = models::PlanCatalog::load_or_builtin(catalog_path)
        .context("Failed to load feature catalog")?;

    Ok(Configurator::new(
        catalog,
        Controls::from(&config.ui),
        config.timing,
    ))
}

/// Runs the interactive board until the user quits.
pub fn launch_configurator(config: &config::Config, catalog_override: Option<&Path>) -> Result<()> {
    let configurator = build_configurator(config, catalog_override)?;
    let mut app_state = tui::AppState::new(configurator, config.clone())?;

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tier;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_with_builtin_catalog() {
        let configurator = build_configurator(&config::Config::default(), None).unwrap();
        assert_eq!(configurator.price_string(Tier::Bronze), "$551.67");
        assert_eq!(configurator.catalog().features().len(), 5);
    }

    #[test]
    fn test_override_wins_and_controls_follow_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "base_payment = 10.0\n\n[[features]]\nid = \"a\"\nprice = 1.5\ntitle = \"A\"\n\n[default_plan]\ngold = [\"a\"]\n",
        )
        .unwrap();

        let mut config = config::Config::default();
        config.ui.show_reset_button = false;
        let mut configurator = build_configurator(&config, Some(&path)).unwrap();

        assert_eq!(configurator.price_string(Tier::Gold), "$11.50");
        assert!(configurator.reset_flow().is_none());
        assert!(!configurator.request_reset());
    }

    #[test]
    fn test_missing_catalog_fails() {
        let dir = TempDir::new().unwrap();
        let err = build_configurator(
            &config::Config::default(),
            Some(&dir.path().join("absent.toml")),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load feature catalog"));
    }
}
