//! Unit tests for settings loading.

use canvas_tool::SettingsError;
use canvas_tool::settings::{ToolSettings, default_settings_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_full_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{
            "window_width": 800,
            "window_height": 600,
            "title": "Route Planner",
            "log_filter": "canvas_tool=debug",
            "scroll_line_px": 32
        }"#,
    )
    .unwrap();

    let settings = ToolSettings::load_from(&path).unwrap();
    assert_eq!(settings.window_width, 800.0);
    assert_eq!(settings.window_height, 600.0);
    assert_eq!(settings.title, "Route Planner");
    assert_eq!(settings.log_filter.as_deref(), Some("canvas_tool=debug"));
    assert_eq!(settings.scroll_line_px, 32.0);
}

#[test]
fn test_unknown_fields_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"theme": "dark", "window_width": 1024}"#).unwrap();

    let settings = ToolSettings::load_from(&path).unwrap();
    assert_eq!(settings.window_width, 1024.0);
    assert_eq!(settings.window_height, ToolSettings::default().window_height);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let err = ToolSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = ToolSettings::load_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn test_invalid_value_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"scroll_line_px": 0}"#).unwrap();

    let err = ToolSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
}

#[test]
fn test_bad_log_filter_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"log_filter": "canvas_tool=loud"}"#).unwrap();

    let err = ToolSettings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(ref msg) if msg.contains("log_filter")));
}

#[test]
fn test_default_path_location() {
    // config_dir is None only on unusual platforms
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("canvas-tool/settings.json"));
    }
}
