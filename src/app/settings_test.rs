use super::*;
use std::io::Write;

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_match_classic_layout() {
    let s = AppSettings::default();
    assert_eq!(s.font_size, 16.0);
    assert_eq!(s.padding, 8.0);
    assert_eq!(s.padding_between, 2.0);
    assert_eq!(s.anchor_clearance, 6.0);
    assert_eq!(s.blink_interval_ms, 500);
    assert_eq!(s.default_background, Rgba::rgb(0xf5, 0xf5, 0xf5));
    assert_eq!(s.connector_routing, ConnectorRouting::NearestAnchor);
}

#[test]
fn toml_partial_file_keeps_other_defaults() {
    let file = write_temp(
        ".toml",
        "padding = 12.0\nconnector_routing = \"corner_offset\"\ndefault_background = \"#ffcc00\"\n",
    );
    let s = load_settings(file.path()).unwrap();
    assert_eq!(s.padding, 12.0);
    assert_eq!(s.connector_routing, ConnectorRouting::CornerOffset);
    assert_eq!(s.default_background, Rgba::rgb(0xff, 0xcc, 0x00));
    assert_eq!(s.font_size, 16.0);
}

#[test]
fn toml_color_table_form() {
    let file = write_temp(".toml", "[canvas_background]\nr = 1\ng = 2\nb = 3\n");
    let s = load_settings(file.path()).unwrap();
    assert_eq!(s.canvas_background, Rgba { r: 1, g: 2, b: 3, a: 255 });
}

#[test]
fn json_file_is_parsed() {
    let file = write_temp(".json", r#"{ "font_size": 20.0, "blink_interval_ms": 250 }"#);
    let s = load_settings(file.path()).unwrap();
    assert_eq!(s.font_size, 20.0);
    assert_eq!(s.blink_interval_ms, 250);
}

#[test]
fn toml_extension_falls_back_to_json() {
    let file = write_temp(".toml", r#"{ "padding_between": 4.0 }"#);
    let s = load_settings(file.path()).unwrap();
    assert_eq!(s.padding_between, 4.0);
}

#[test]
fn invalid_toml_reports_toml_error() {
    let file = write_temp(".toml", "padding = [oops");
    let err = load_settings(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Toml { .. }), "{err}");
}

#[test]
fn invalid_json_reports_json_error() {
    let file = write_temp(".json", "{ not json");
    let err = load_settings(file.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Json { .. }), "{err}");
}

#[test]
fn bad_hex_color_is_rejected() {
    let file = write_temp(".toml", "default_background = \"#nothex\"\n");
    assert!(load_settings(file.path()).is_err());
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
