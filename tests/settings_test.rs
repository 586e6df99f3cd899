//! Tests for the settings store.

use metafetch::{Settings, SettingsStore};
use serde_json::Value;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> SettingsStore {
    SettingsStore::with_path(dir.path().join("settings.json"))
}

#[test]
fn first_load_creates_the_file_with_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let settings = store.load();
    assert_eq!(settings, Settings::default());
    assert!(store.path().exists());

    // On-disk format keeps the historical camelCase field names.
    let raw: Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert!(raw.get("accentColor").is_some());
    assert!(raw.get("listOrder").is_some());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut settings = Settings::default();
    settings.theme = "theme-light".to_owned();
    settings.accent_color = "purple".to_owned();
    settings.language = "pt".to_owned();
    settings.list_visibility.insert("games".to_owned(), false);

    store.save(&settings).unwrap();
    assert_eq!(store.load(), settings);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // A settings file written by an older version, with fewer fields.
    std::fs::write(store.path(), r#"{"theme": "theme-light"}"#).unwrap();

    let settings = store.load();
    assert_eq!(settings.theme, "theme-light");
    assert_eq!(settings.accent_color, "blue");
    assert!(!settings.list_order.is_empty());
}

#[test]
fn corrupt_file_degrades_to_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    std::fs::write(store.path(), "{not json").unwrap();

    assert_eq!(store.load(), Settings::default());
}

#[test]
fn request_language_follows_ui_language() {
    let mut settings = Settings::default();

    settings.language = "pt".to_owned();
    assert_eq!(settings.request_language(), "pt-BR");

    settings.language = "en".to_owned();
    assert_eq!(settings.request_language(), "en-US");
}
