use super::*;
use tempfile::tempdir;

#[test]
fn empty_settings_yield_default_config() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.to_config().unwrap(), EditorConfig::default());
}

#[test]
fn partial_settings_override_defaults() {
    let settings: Settings = serde_json::from_str(
        r#"{ "editor": { "edit_area_cols": 72, "autosave_secs": 0, "colour_scheme": "mono" } }"#,
    )
    .unwrap();
    let config = settings.to_config().unwrap();
    assert_eq!(config.edit_area_cols, 72);
    assert_eq!(config.autosave_secs, 0);
    assert_eq!(config.colour_scheme, ColourScheme::Mono);
    assert_eq!(config.edit_area_rows, EditorConfig::default().edit_area_rows);
}

#[test]
fn out_of_range_setting_is_rejected() {
    let settings: Settings =
        serde_json::from_str(r#"{ "editor": { "edit_area_rows": 1000 } }"#).unwrap();
    assert!(matches!(
        settings.to_config(),
        Err(ConfigError::OutOfRange {
            name: "edit_area_rows",
            ..
        })
    ));
}

#[test]
fn unknown_colour_scheme_is_rejected() {
    let settings: Settings =
        serde_json::from_str(r#"{ "editor": { "colour_scheme": "neon" } }"#).unwrap();
    assert!(matches!(
        settings.to_config(),
        Err(ConfigError::Invalid {
            name: "colour_scheme",
            ..
        })
    ));
}

#[test]
fn ensure_settings_file_writes_template_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file(&path).unwrap();
    let loaded = load_settings(&path).unwrap();
    assert_eq!(loaded, Settings::template());
    assert_eq!(loaded.to_config().unwrap(), EditorConfig::default());

    std::fs::write(&path, r#"{ "editor": { "rulers": false } }"#).unwrap();
    ensure_settings_file(&path).unwrap();
    let loaded = load_settings(&path).unwrap();
    assert_eq!(loaded.editor.rulers, Some(false));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(load_settings(&path), Err(SettingsError::Parse(_))));
}

#[test]
fn parse_keybinding_variants() {
    assert_eq!(
        parse_keybinding("ctrl+s"),
        Some(Key::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
    );
    assert_eq!(
        parse_keybinding("Ctrl+Shift+Q"),
        Some(Key::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(parse_keybinding("F2"), Some(Key::simple(KeyCode::F(2))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("insert"), Some(Key::simple(KeyCode::Insert)));
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+xy"), None);
}
