// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::models::settings::{LayoutMode, Settings, SettingsPatch};
use crate::domain::repositories::storage_repository::{KeyValueStore, StorageError};

/// 存储键：JSON 编码的 [`Settings`]
pub const SETTINGS_KEY: &str = "settings";
/// 存储键：布局模式字符串
pub const LAYOUT_MODE_KEY: &str = "layoutMode";

/// 设置存储
///
/// 持有当前的 [`Settings`] 与 [`LayoutMode`]，每次修改都同步写回存储。
/// 作为显式值注入到各个消费方，而不是全局单例。
pub struct SettingsStore {
    storage: Arc<dyn KeyValueStore>,
    settings: Settings,
    layout_mode: LayoutMode,
}

impl SettingsStore {
    /// 从存储加载配置
    ///
    /// 缺失或损坏的数据回退为默认值，不会失败。
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let settings = match storage.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(value) => {
                    let (settings, repaired) = Settings::from_stored(&value);
                    if !repaired.is_empty() {
                        warn!(fields = ?repaired, "Stored settings had invalid fields, using defaults for them");
                    }
                    settings
                }
                Err(e) => {
                    warn!("Stored settings are not valid JSON, using defaults: {}", e);
                    Settings::default()
                }
            },
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!("Failed to read stored settings, using defaults: {}", e);
                Settings::default()
            }
        };

        let layout_mode = match storage.get(LAYOUT_MODE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!("{}, falling back to {}", e, LayoutMode::default());
                LayoutMode::default()
            }),
            Ok(None) => LayoutMode::default(),
            Err(e) => {
                warn!("Failed to read stored layout mode: {}", e);
                LayoutMode::default()
            }
        };

        debug!(layout_mode = %layout_mode, "Settings loaded");
        Self {
            storage,
            settings,
            layout_mode,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    /// 深度合并部分更新并立即持久化
    ///
    /// 内存中的配置无论写入是否成功都会更新；写入失败时返回错误。
    pub fn update(&mut self, patch: SettingsPatch) -> Result<&Settings, StorageError> {
        let repaired = self.settings.merge(patch);
        if !repaired.is_empty() {
            debug!(fields = ?repaired, "Settings update clamped or rejected fields");
        }
        self.persist()?;
        Ok(&self.settings)
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) -> Result<(), StorageError> {
        self.layout_mode = mode;
        self.storage.set(LAYOUT_MODE_KEY, mode.as_str())
    }

    /// 清除持久化的配置并恢复默认值
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.settings = Settings::default();
        self.layout_mode = LayoutMode::default();
        self.storage.remove(SETTINGS_KEY)?;
        self.storage.remove(LAYOUT_MODE_KEY)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&self.settings)?;
        self.storage.set(SETTINGS_KEY, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::settings::{CardPatch, FontFamily, FontPatch, LayoutPatch};
    use crate::infrastructure::storage::InMemoryStorage;

    fn memory() -> Arc<InMemoryStorage> {
        Arc::new(InMemoryStorage::new())
    }

    #[test]
    fn test_load_without_stored_data_uses_defaults() {
        let store = SettingsStore::load(memory());
        assert_eq!(store.settings(), &Settings::default());
        assert_eq!(store.layout_mode(), LayoutMode::Basic);
    }

    #[test]
    fn test_load_with_malformed_json_uses_defaults() {
        let storage = memory();
        storage.set(SETTINGS_KEY, "{not json").unwrap();
        storage.set(LAYOUT_MODE_KEY, "spiral").unwrap();

        let store = SettingsStore::load(storage);
        assert_eq!(store.settings(), &Settings::default());
        assert_eq!(store.layout_mode(), LayoutMode::Basic);
    }

    #[test]
    fn test_update_then_load_reproduces_values() {
        let storage = memory();
        let mut store = SettingsStore::load(storage.clone());
        store
            .update(SettingsPatch {
                layout: Some(LayoutPatch {
                    column_count: Some(5),
                    grid_gap: Some(40),
                }),
                card: Some(CardPatch {
                    font: Some(FontPatch {
                        family: Some(FontFamily::Poppins),
                        size: Some(20),
                        color: Some("#ff00aa".to_string()),
                    }),
                    height: Some(420),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .unwrap();
        store.set_layout_mode(LayoutMode::Masonry).unwrap();

        let reloaded = SettingsStore::load(storage);
        assert_eq!(reloaded.settings(), store.settings());
        assert_eq!(reloaded.settings().card.font.family, FontFamily::Poppins);
        assert_eq!(reloaded.layout_mode(), LayoutMode::Masonry);
    }

    #[test]
    fn test_invalid_colour_update_keeps_previous_colour() {
        let storage = memory();
        let mut store = SettingsStore::load(storage.clone());
        let colour = |value: &str| SettingsPatch {
            card: Some(CardPatch {
                font: Some(FontPatch {
                    color: Some(value.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        store.update(colour("#ff0000")).unwrap();
        store.update(colour("red")).unwrap();
        assert_eq!(store.settings().card.font.color, "#ff0000");

        let reloaded = SettingsStore::load(storage);
        assert_eq!(reloaded.settings().card.font.color, "#ff0000");
    }

    #[test]
    fn test_layout_mode_is_stored_as_plain_string() {
        let storage = memory();
        let mut store = SettingsStore::load(storage.clone());
        store.set_layout_mode(LayoutMode::Coverflow).unwrap();
        assert_eq!(
            storage.get(LAYOUT_MODE_KEY).unwrap().as_deref(),
            Some("coverflow")
        );
        // layout mode alone never writes the settings key
        assert_eq!(storage.get(SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_removes_keys() {
        let storage = memory();
        let mut store = SettingsStore::load(storage.clone());
        store
            .update(SettingsPatch {
                layout: Some(LayoutPatch {
                    column_count: Some(1),
                    grid_gap: None,
                }),
                ..Default::default()
            })
            .unwrap();
        store.clear().unwrap();

        assert_eq!(store.settings(), &Settings::default());
        assert_eq!(storage.get(SETTINGS_KEY).unwrap(), None);
    }
}
