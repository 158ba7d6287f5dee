//! Catalog settings
//!
//! Settings are read from an optional JSON file. A missing file yields
//! defaults, and so does an unparseable one (with a warning).

use crate::builtin::FALLBACK_TYPEFACE;
use crate::error::StorageResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunables for the template catalog and extractor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogSettings {
    /// Storage key holding the JSON list of custom templates
    pub custom_templates_key: String,
    /// Storage key holding the selected template id
    pub selected_template_key: String,
    /// Typeface used when a theme declares no East-Asian font
    pub fallback_typeface: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            custom_templates_key: "pptx-custom-templates".to_string(),
            selected_template_key: "pptx-selected-template".to_string(),
            fallback_typeface: FALLBACK_TYPEFACE.to_string(),
        }
    }
}

/// Loads and saves [`CatalogSettings`]
pub struct SettingsManager {
    settings_path: PathBuf,
    current: CatalogSettings,
}

impl SettingsManager {
    /// Settings file name inside a data directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Create a manager for an explicit settings file
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            current: CatalogSettings::default(),
        }
    }

    /// Create a manager for the settings file in a data directory
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(Self::FILE_NAME))
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if file doesn't exist
    pub fn load(&mut self) -> StorageResult<&CatalogSettings> {
        if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            match serde_json::from_str::<CatalogSettings>(&content) {
                Ok(settings) => {
                    self.current = settings;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse settings file, using defaults: {}",
                        e
                    );
                    self.current = CatalogSettings::default();
                }
            }
        } else {
            self.current = CatalogSettings::default();
        }
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub fn save(&self) -> StorageResult<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> &CatalogSettings {
        &self.current
    }

    /// Replace settings and save to disk
    pub fn update(&mut self, settings: CatalogSettings) -> StorageResult<()> {
        self.current = settings;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.custom_templates_key, "pptx-custom-templates");
        assert_eq!(settings.selected_template_key, "pptx-selected-template");
        assert_eq!(settings.fallback_typeface, FALLBACK_TYPEFACE);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: CatalogSettings =
            serde_json::from_str(r#"{"fallback_typeface":"Arial"}"#).unwrap();
        assert_eq!(settings.fallback_typeface, "Arial");
        assert_eq!(settings.custom_templates_key, "pptx-custom-templates");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::in_dir(temp_dir.path());
        assert_eq!(manager.load().unwrap(), &CatalogSettings::default());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::in_dir(temp_dir.path());
        std::fs::write(manager.settings_path(), "{ nope").unwrap();
        assert_eq!(manager.load().unwrap(), &CatalogSettings::default());
    }

    #[test]
    fn test_update_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::in_dir(temp_dir.path().join("cfg"));

        let mut settings = CatalogSettings::default();
        settings.fallback_typeface = "Yu Gothic".to_string();
        manager.update(settings).unwrap();

        let mut manager2 = SettingsManager::in_dir(temp_dir.path().join("cfg"));
        assert_eq!(manager2.load().unwrap().fallback_typeface, "Yu Gothic");
    }
}
