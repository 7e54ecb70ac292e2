//! Tests for UI config loading.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tictactoe_history::UiConfig;

#[test]
fn test_defaults_when_no_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = UiConfig::resolve(None, &dir.path().join("missing.toml")).expect("Defaults");
    assert_eq!(config, UiConfig::default());
    assert_eq!(config.title(), "Tic-Tac-Toe");
    assert!(*config.mouse_capture());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_fallback_file_is_used() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(&path, "title = \"Noughts\"\nmouse_capture = false\n").expect("Write failed");

    let config = UiConfig::resolve(None, &path).expect("Load failed");
    assert_eq!(config.title(), "Noughts");
    assert!(!*config.mouse_capture());
    // Unset fields keep their defaults.
    assert_eq!(config.log_file(), Path::new("tictactoe.log"));
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.toml");
    let err = UiConfig::resolve(Some(missing.as_path()), &missing).unwrap_err();
    assert!(err.message.contains("not found"));
}

#[test]
fn test_explicit_path_wins_over_fallback() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let explicit = dir.path().join("explicit.toml");
    let fallback = dir.path().join("fallback.toml");
    fs::write(&explicit, "log_filter = \"debug\"\n").expect("Write failed");
    fs::write(&fallback, "log_filter = \"warn\"\n").expect("Write failed");

    let config = UiConfig::resolve(Some(explicit.as_path()), &fallback).expect("Load failed");
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = UiConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("typo.toml");
    fs::write(&path, "titel = \"oops\"\n").expect("Write failed");

    assert!(UiConfig::from_file(&path).is_err());
}
