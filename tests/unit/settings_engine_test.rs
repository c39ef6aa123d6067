//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, last-file persistence, and reset behavior.

use linkshelf::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linkshelf::types::settings::{EditorSettings, WindowSettings};
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// When no config file exists on disk, `load()` must return the built-in
/// default `EditorSettings` so the editor can start with sensible values.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(
        settings,
        EditorSettings::default(),
        "Loading without a config file must return default settings"
    );
    assert!(settings.last_file.is_none());
}

#[test]
fn test_default_window_size() {
    let settings = EditorSettings::default();
    assert_eq!(settings.window, WindowSettings { width: 1100, height: 600 });
}

/// After calling `set_last_file`, the change must be persisted to disk so that
/// a completely new SettingsEngine instance reading the same file sees it.
#[test]
fn test_set_last_file_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_last_file(Some("/home/user/bookmarks.json".to_string()))
            .unwrap();
    }

    {
        let mut engine2 = engine_in_temp(&dir);
        let loaded = engine2.load().unwrap();
        assert_eq!(
            loaded.last_file.as_deref(),
            Some("/home/user/bookmarks.json"),
            "set_last_file must persist so a new engine instance reads it back"
        );
    }
}

#[test]
fn test_clearing_last_file_persists() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_last_file(Some("a.json".to_string())).unwrap();
        engine.set_last_file(None).unwrap();
    }

    let mut engine2 = engine_in_temp(&dir);
    assert!(engine2.load().unwrap().last_file.is_none());
}

/// `reset()` must restore factory defaults and write them to disk.
#[test]
fn test_reset_restores_defaults_and_persists() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_last_file(Some("old.json".to_string())).unwrap();
        engine.reset().unwrap();
        assert_eq!(*engine.settings(), EditorSettings::default());
    }

    let mut engine2 = engine_in_temp(&dir);
    assert_eq!(engine2.load().unwrap(), EditorSettings::default());
}

/// A malformed config file must surface as an error rather than silently
/// falling back to defaults, so the user can notice the broken file.
#[test]
fn test_load_malformed_config_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    assert!(engine.load().is_err());
}

/// Unknown fields in the config file are tolerated for forward compatibility.
#[test]
fn test_load_tolerates_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"last_file":"b.json","window":{"width":800,"height":500},"future_flag":true}"#,
    )
    .unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    let settings = engine.load().unwrap();
    assert_eq!(settings.last_file.as_deref(), Some("b.json"));
    assert_eq!(settings.window.width, 800);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config").join("settings.json");

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    engine.load().unwrap();
    engine.save().unwrap();
    assert!(path.exists());
}
