//! Unit tests for configuration loading.

use resizable_element::{Edge, GhostPositioning, ResizableConfig, ResizeCursors};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_path() {
    let file = config_file(
        r#"{
            "enableGhostResize": true,
            "resizeSnapGrid": {"bottom": 20},
            "ghostElementPositioning": "absolute",
            "resizeMoveThreshold": 3
        }"#,
    );

    let config = ResizableConfig::load_from_path(file.path()).unwrap();

    assert!(config.enable_ghost_resize);
    assert_eq!(config.resize_snap_grid.get(Edge::Bottom), Some(20.0));
    assert_eq!(config.ghost_element_positioning, GhostPositioning::Absolute);
    assert_eq!(config.resize_move_threshold, 3.0);
    // Unspecified keys keep their defaults
    assert_eq!(config.mouse_move_throttle_ms, 50);
    assert!(!config.allow_negative_resizes);
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = ResizableConfig::load_from_path(&path).unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("reading resize config"));
    assert!(message.contains("absent.json"));
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let file = config_file(r#"{"resizeSnapGrid": {"left": -10}}"#);

    let err = ResizableConfig::load_from_path(file.path()).unwrap_err();

    assert!(format!("{err:#}").contains("invalid configuration"));
}

#[test]
fn test_partial_cursor_table_falls_back_per_entry() {
    let config =
        ResizableConfig::from_json_str(r#"{"resizeCursors": {"leftOrRight": "ew-resize"}}"#)
            .unwrap();

    let defaults = ResizeCursors::default();
    assert_eq!(config.resize_cursors.left_or_right, "ew-resize");
    assert_eq!(config.resize_cursors.top_left, defaults.top_left);
    assert_eq!(config.resize_cursors.top_or_bottom, defaults.top_or_bottom);
}

#[test]
fn test_zero_snap_means_no_snap() {
    let config = ResizableConfig::from_json_str(r#"{"resizeSnapGrid": {"right": 0}}"#).unwrap();

    assert_eq!(config.resize_snap_grid.get(Edge::Right), None);
}

#[test]
fn test_round_trip_keeps_attribute_names() {
    let config = ResizableConfig::default()
        .with_snap(Edge::Top, 5.0)
        .with_throttle_ms(16);

    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["mouseMoveThrottleMS"], 16);
    assert_eq!(json["resizeSnapGrid"]["top"], 5.0);
    assert!(json.get("validateResize").is_none());
}
