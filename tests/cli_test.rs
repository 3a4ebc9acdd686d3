//! Integration tests for the cfgcompat binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    (temp, path)
}

fn cfgcompat() -> Command {
    let mut cmd = Command::new(cargo_bin("cfgcompat"));
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    cfgcompat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--version-key"))
        .stdout(predicate::str::contains("--app-version"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    cfgcompat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn minimum_met_is_compatible() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "2.4.0"}"#);
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "2.0.0"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("2.4.0 is compatible"));
    Ok(())
}

#[test]
fn minimum_not_met_is_incompatible() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.yaml", "version: 1.9.0\n");
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "2.0.0", "--rule", "minimum"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not compatible"));
    Ok(())
}

#[test]
fn above_range_is_incompatible() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.toml", "version = \"3.0.0\"\n");
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-r", "range", "--min-version", "2.0.0", "--max-version", "2.9.9"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn unparsable_version_is_unknown() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "abc"}"#);
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "1.0.0", "-r", "exact"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'abc'"));
    Ok(())
}

#[test]
fn missing_key_is_unknown_and_named() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.yml", "name: service\n");
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "1.0.0", "-k", "config_version"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'config_version'"));
    Ok(())
}

#[test]
fn trailing_zero_padding_matches_exactly() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "1.2"}"#);
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "1.2.0", "-r", "exact"])
        .assert()
        .code(0);
    Ok(())
}

#[test]
fn nested_key_path() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config(
        "app.yml",
        "app:\n  meta:\n    schema_version: \"4.1.0\"\n",
    );
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "4.2.0", "-r", "maximum", "-k", "app.meta.schema_version"])
        .assert()
        .code(0);
    Ok(())
}

#[test]
fn range_missing_bound_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "2.0.0"}"#);
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-r", "range", "--min-version", "1.0.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--max-version"));
    Ok(())
}

#[test]
fn missing_app_version_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "2.0.0"}"#);
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--app-version"));
    Ok(())
}

#[test]
fn missing_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cfgcompat()
        .arg("-c")
        .arg(temp.path().join("absent.json"))
        .args(["-a", "1.0.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
    Ok(())
}

#[test]
fn malformed_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", "{ not json");
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "1.0.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn unknown_extension_requires_type() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.conf", "version: 1.0.0\n");
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "1.0.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--config-type"));

    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "1.0.0", "-t", "yaml"])
        .assert()
        .code(0);
    Ok(())
}

#[test]
fn verbose_prints_diagnostics() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "2.4.0"}"#);
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "2.0.0", "-v"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Key: version"))
        .stdout(predicate::str::contains("Rule: minimum"))
        .stdout(predicate::str::contains("satisfies requirement >= 2.0.0"));
    Ok(())
}

#[test]
fn quiet_prints_nothing_on_success() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "2.4.0"}"#);
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "2.0.0", "-q"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn json_output_is_machine_readable() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "1.9.0"}"#);
    let output = cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "2.0.0", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["verdict"], "incompatible");
    assert_eq!(value["found_version_raw"], "1.9.0");
    assert_eq!(value["reference_version_raw"], "2.0.0");
    assert_eq!(value["rule"], "minimum");
    Ok(())
}

#[test]
fn invalid_rule_name_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "1.0.0"}"#);
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "1.0.0", "-r", "latest"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn fractional_number_version_is_unknown() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.yml", "version: 1.10\n");
    for rule in ["minimum", "exact"] {
        cfgcompat()
            .arg("-c")
            .arg(&path)
            .args(["-a", "1.2", "-r", rule])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("not compatible").not())
            .stderr(predicate::str::contains("quote it"));
    }
    Ok(())
}

#[test]
fn quoted_version_keeps_its_text() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.yml", "version: \"1.10\"\n");
    cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-a", "1.2"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("1.10 is compatible"));
    Ok(())
}

#[test]
fn json_errors_are_machine_readable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = cfgcompat()
        .arg("-c")
        .arg(temp.path().join("absent.json"))
        .args(["-a", "1.0.0", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["verdict"], "unknown");
    assert!(value["error"]
        .as_str()
        .unwrap_or_default()
        .contains("Configuration file not found"));
    Ok(())
}

#[test]
fn json_rule_errors_are_machine_readable() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_config("app.json", r#"{"version": "2.0.0"}"#);
    let output = cfgcompat()
        .arg("-c")
        .arg(&path)
        .args(["-r", "range", "--min-version", "1.0.0", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["verdict"], "unknown");
    assert!(value["error"]
        .as_str()
        .unwrap_or_default()
        .contains("--max-version"));
    Ok(())
}
