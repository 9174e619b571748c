// tests/config_tests.rs
//! Theme preference persistence

use crypto_atlas::config::{load, preferences_path, Preferences};
use crypto_atlas::consts::{CONFIG_PATH_ENV, THEME_ENV};
use crypto_atlas::{AtlasError, Theme};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn missing_file_gives_defaults() {
    env::remove_var(THEME_ENV);
    let dir = tempdir().unwrap();
    let prefs = Preferences::load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(prefs.theme, Theme::Light);
}

#[test]
#[serial]
fn theme_env_sets_initial_default() {
    env::set_var(THEME_ENV, "dark");
    let dir = tempdir().unwrap();
    let prefs = Preferences::load_from(dir.path().join("absent.toml")).unwrap();
    env::remove_var(THEME_ENV);
    assert_eq!(prefs.theme, Theme::Dark);
}

#[test]
#[serial]
fn save_then_load_keeps_theme() {
    env::remove_var(THEME_ENV);
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("preferences.toml");

    Preferences { theme: Theme::Dark }.save_to(&path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("theme = \"dark\""));

    let loaded = Preferences::load_from(&path).unwrap();
    assert_eq!(loaded.theme, Theme::Dark);
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    fs::write(&path, "theme = \"purple\"").unwrap();
    assert!(matches!(
        Preferences::load_from(&path),
        Err(AtlasError::TomlDe(_))
    ));
}

#[test]
#[serial]
fn env_var_overrides_location() {
    env::remove_var(THEME_ENV);
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    env::set_var(CONFIG_PATH_ENV, &path);

    assert_eq!(preferences_path(), path);
    Preferences { theme: Theme::Dark }.save().unwrap();
    let loaded = load().unwrap();

    env::remove_var(CONFIG_PATH_ENV);
    assert_eq!(loaded.theme, Theme::Dark);
}

#[test]
#[serial]
fn empty_env_var_falls_back_to_default_location() {
    env::set_var(CONFIG_PATH_ENV, "");
    let path = preferences_path();
    env::remove_var(CONFIG_PATH_ENV);
    assert_ne!(path, std::path::PathBuf::new());
    assert!(path.ends_with("preferences.toml"));
}

#[test]
fn theme_parses_case_insensitively() {
    assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
    assert!("sepia".parse::<Theme>().is_err());
}
