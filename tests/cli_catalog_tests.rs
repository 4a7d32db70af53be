//! End-to-end tests for `plan-configurator catalog`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_catalog_builtin_text() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["catalog"], &config_dir).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Base payment: $511.67/month"));
    for id in ["arc", "gap", "glasscoat", "qualityguard", "tirewheel"] {
        assert!(stdout.contains(id), "missing {id}");
    }
}

#[test]
fn test_catalog_json() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["catalog", "--json"], &config_dir)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["base_payment"], 511.67);
    assert_eq!(result["features"].as_array().unwrap().len(), 5);
    assert_eq!(result["features"][0]["id"], "arc");
    assert_eq!(result["features"][0]["price"], 25.0);
    assert_eq!(
        result["default_plan"]["bronze"],
        serde_json::json!(["arc", "gap"])
    );
}

#[test]
fn test_catalog_from_config_path() {
    let config_dir = TempDir::new().unwrap();
    let catalog = write_file(config_dir.path(), "small.toml", SMALL_CATALOG);
    write_file(
        config_dir.path(),
        "config.toml",
        &format!("[paths]\ncatalog = {:?}\n", catalog.to_str().unwrap()),
    );

    let output = isolated_command(&["catalog", "--json"], &config_dir)
        .output()
        .unwrap();

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["base_payment"], 100.0);
    assert_eq!(result["features"].as_array().unwrap().len(), 2);
}

#[test]
fn test_catalog_invalid_file() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(dir.path(), "bad.toml", "base_payment = \"lots\"\n");
    let output = isolated_command(&["catalog", "--catalog", bad.to_str().unwrap()], &dir)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_catalog_toml_feeds_back_into_quote() {
    let dir = TempDir::new().unwrap();
    let exported = isolated_command(&["catalog", "--toml"], &dir)
        .output()
        .unwrap();
    assert_eq!(exported.status.code(), Some(0));
    let text = String::from_utf8(exported.stdout).unwrap();
    assert!(text.contains("base_payment = 511.67"));

    let path = write_file(dir.path(), "exported.toml", &text);
    let output = isolated_command(
        &["quote", "--catalog", path.to_str().unwrap(), "--json"],
        &dir,
    )
    .output()
    .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["tiers"][3]["display"], "$551.67");
    assert_eq!(result["tiers"][0]["display"], "$595.67");
}

#[test]
fn test_catalog_rejects_sub_cent_prices() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "sub_cent.toml",
        "base_payment = 100.004\n\n[[features]]\nid = \"a\"\nprice = 1.004\ntitle = \"A\"\n",
    );
    let output = isolated_command(&["catalog", "--catalog", path.to_str().unwrap()], &dir)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("fraction of a cent"));
}
