// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for the activity-names binary

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_activity-names"))
        .args(args)
        .env_remove("ACTIVITY_NAMES_LOCALE")
        .env_remove("LC_ALL")
        .env_remove("LC_MESSAGES")
        .env("LANG", "C")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute activity-names")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_name_command() {
    let output = run(&["name", "stairClimbing"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Stair Climbing");
}

#[test]
fn test_localize_command() {
    let output = run(&["localize", "stair_climbing", "--locale", "de"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Treppensteigen");

    let output = run(&["localize", "44"]);
    assert_eq!(stdout(&output), "Stair Climbing", "LANG=C should mean English");
}

#[test]
fn test_unknown_raw_value_prints_other() {
    let output = run(&["localize", "9999", "--locale", "fr"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Autre");
}

#[test]
fn test_unknown_identifier_fails() {
    let output = run(&["name", "parkour"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_locale_fails() {
    let output = run(&["localize", "running", "--locale", "zz"]);
    assert!(!output.status.success());
}

#[test]
fn test_list_json() {
    let output = run(&["list", "--format", "json", "--locale", "es"]);
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("list output should be JSON");
    assert_eq!(rows.len(), 84);
    let swimming = rows
        .iter()
        .find(|row| row["id"] == "swimming")
        .expect("swimming listed");
    assert_eq!(swimming["raw"], 46);
    assert_eq!(swimming["name"], "Swimming");
    assert_eq!(swimming["localized"], "Natación");
}

#[test]
fn test_config_and_catalog_files() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("extra.xcstrings"),
        r#"{"strings": {"Running": {"localizations": {"it": {"stringUnit": {"state": "translated", "value": "Corsa"}}}}}}"#,
    )
    .unwrap();
    let config = dir.path().join("activity-names.yaml");
    fs::write(&config, "locale: it\ncatalogs:\n  - extra.xcstrings\n").unwrap();
    let config = config.to_str().unwrap();

    let output = run(&["localize", "running", "--config", config]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "Corsa");

    let output = run(&["check", "--strict", "--config", config]);
    assert!(!output.status.success(), "italian coverage is partial");
    assert!(stdout(&output).contains("Stair Climbing"));
}

#[test]
fn test_check_bundled_is_complete() {
    let output = run(&["check", "--strict"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("complete"));
}

#[test]
fn test_check_json() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("extra.xcstrings");
    fs::write(
        &catalog,
        r#"{"strings": {"Running": {"localizations": {"it": {"stringUnit": {"state": "translated", "value": "Corsa"}}}}}}"#,
    )
    .unwrap();

    let output = run(&["check", "--format", "json", "--catalog", catalog.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("check output should be JSON");
    let locales: Vec<&str> = report
        .iter()
        .map(|entry| entry["locale"].as_str().unwrap())
        .collect();
    assert_eq!(locales, ["it", "de", "es", "fr", "ja"]);

    let italian = &report[0];
    assert_eq!(italian["translated"], 1);
    let missing = italian["missing"].as_array().unwrap();
    assert_eq!(missing.len(), 83);
    assert!(missing.iter().any(|name| name == "Stair Climbing"));
    assert!(report[1..]
        .iter()
        .all(|entry| entry["missing"].as_array().unwrap().is_empty()));

    let output = run(&[
        "check",
        "--strict",
        "--format",
        "json",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let _: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("report still printed under --strict");
}
