//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use plan_configurator::app::{Configurator, Controls};
use plan_configurator::config::TimingConfig;
use plan_configurator::models::PlanCatalog;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A small catalog with round prices.
pub const SMALL_CATALOG: &str = r#"
base_payment = 100.00

[[features]]
id = "alpha"
price = 10.00
title = "Alpha Cover"

[[features]]
id = "beta"
price = 2.50
title = "Beta Cover"

[default_plan]
gold = ["alpha", "beta"]
bronze = ["beta"]
"#;

/// Configurator over the built-in catalog with every control present.
pub fn builtin_configurator() -> Configurator {
    let catalog = PlanCatalog::builtin().expect("built-in catalog parses");
    Configurator::new(catalog, Controls::default(), TimingConfig::default())
}

/// Writes `content` to `name` inside `dir` and returns the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// Path to the binary under test.
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_plan-configurator")
}

/// Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("PLAN_CONFIGURATOR_CONFIG_DIR", config_dir.path());
    cmd.env_remove("PLAN_CONFIGURATOR_LOG");
    cmd.args(args);
    cmd
}
