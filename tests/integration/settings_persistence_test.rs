// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use footprint::domain::models::settings::{
    BorderPatch, CardPatch, FontFamily, FontPatch, LayoutMode, LayoutPatch, PagePatch, Settings,
    SettingsPatch,
};
use footprint::domain::repositories::storage_repository::KeyValueStore;
use footprint::domain::services::settings_store::{SettingsStore, LAYOUT_MODE_KEY, SETTINGS_KEY};
use footprint::infrastructure::storage::LocalStorage;
use tempfile::TempDir;

fn storage(dir: &TempDir) -> Arc<LocalStorage> {
    Arc::new(LocalStorage::new(dir.path()))
}

#[test]
fn test_update_then_reload_reproduces_settings() {
    let dir = TempDir::new().unwrap();
    let mut store = SettingsStore::load(storage(&dir));

    store
        .update(SettingsPatch {
            layout: Some(LayoutPatch {
                column_count: Some(4),
                grid_gap: Some(40),
            }),
            page: Some(PagePatch {
                container_padding: Some(16),
                background_image: Some(Some("https://images.example.com/bg.png".to_string())),
            }),
            card: Some(CardPatch {
                font: Some(FontPatch {
                    family: Some(FontFamily::OpenSans),
                    size: Some(18),
                    color: Some("#222222".to_string()),
                }),
                border: Some(BorderPatch {
                    width: Some(2),
                    color: Some("#00000080".to_string()),
                    radius: Some(8),
                }),
                height: Some(420),
            }),
        })
        .unwrap();
    store.set_layout_mode(LayoutMode::Coverflow).unwrap();
    let saved = store.settings().clone();

    let reloaded = SettingsStore::load(storage(&dir));
    assert_eq!(reloaded.settings(), &saved);
    assert_eq!(reloaded.layout_mode(), LayoutMode::Coverflow);
    assert_eq!(reloaded.settings().card.font.family, FontFamily::OpenSans);
}

#[test]
fn test_corrupt_storage_recovers_to_defaults() {
    let dir = TempDir::new().unwrap();
    let raw = storage(&dir);
    raw.set(SETTINGS_KEY, "{ not json").unwrap();
    raw.set(LAYOUT_MODE_KEY, "carousel").unwrap();

    let store = SettingsStore::load(raw);
    assert_eq!(store.settings(), &Settings::default());
    assert_eq!(store.layout_mode(), LayoutMode::Basic);
}

#[test]
fn test_out_of_range_stored_values_are_clamped() {
    let dir = TempDir::new().unwrap();
    let raw = storage(&dir);
    raw.set(
        SETTINGS_KEY,
        r##"{"layout":{"columnCount":12,"gridGap":-5},"card":{"height":900,"font":{"color":"blue"}}}"##,
    )
    .unwrap();

    let store = SettingsStore::load(raw);
    let settings = store.settings();
    assert_eq!(settings.layout.column_count, 6);
    assert_eq!(settings.layout.grid_gap, 0);
    assert_eq!(settings.card.height, 500);
    assert_eq!(settings.card.font.color, Settings::default().card.font.color);
}

#[test]
fn test_clear_removes_persisted_keys() {
    let dir = TempDir::new().unwrap();
    let raw = storage(&dir);
    let mut store = SettingsStore::load(raw.clone());
    store.set_layout_mode(LayoutMode::Masonry).unwrap();
    store
        .update(SettingsPatch {
            card: Some(CardPatch {
                height: Some(250),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();

    store.clear().unwrap();
    assert!(raw.get(SETTINGS_KEY).unwrap().is_none());
    assert!(raw.get(LAYOUT_MODE_KEY).unwrap().is_none());
    assert_eq!(SettingsStore::load(raw).settings(), &Settings::default());
}
