//! End-to-end tests for `plan-configurator config` commands.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_path_uses_override() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "path"], &config_dir)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        config_dir.path().join("config.toml").to_str().unwrap()
    );
}

#[test]
fn test_config_show_defaults() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show"], &config_dir)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# No config file found"));
    assert!(stdout.contains("[timing]"));
}

#[test]
fn test_config_show_json() {
    let config_dir = TempDir::new().unwrap();
    write_file(
        config_dir.path(),
        "config.toml",
        "[ui]\ntheme_mode = \"Dark\"\nshow_save_button = false\n",
    );

    let output = isolated_command(&["config", "show", "--json"], &config_dir)
        .output()
        .unwrap();

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(result["paths"].is_object());
    assert!(result["timing"].is_object());
    assert_eq!(result["ui"]["theme_mode"], "Dark");
    assert_eq!(result["ui"]["show_save_button"], false);
}

#[test]
fn test_config_show_invalid_file() {
    let config_dir = TempDir::new().unwrap();
    write_file(config_dir.path(), "config.toml", "[timing]\nsave_delay_ms = 0\n");

    let output = isolated_command(&["config", "show"], &config_dir)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
