//! Export settings management
//!
//! Page geometry, typography, branding, and transliteration overrides,
//! persisted as camelCase JSON. A missing or unreadable settings file falls
//! back to the defaults.

use crate::Result;
use layout_engine::{FooterLink, PageGeometry, Rgb, Typography};
use markup::TransliterationTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used inside an app data directory
pub const SETTINGS_FILE_NAME: &str = "export-settings.json";

/// All export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSettings {
    pub page: PageGeometry,
    pub typography: Typography,
    pub branding: BrandingSettings,
    /// Entries merged over the built-in transliteration table
    pub transliteration: TransliterationTable,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            typography: Typography::default(),
            branding: BrandingSettings::default(),
            transliteration: TransliterationTable::empty(),
        }
    }
}

impl ExportSettings {
    /// Built-in transliteration table with the configured overrides applied
    pub fn transliteration_table(&self) -> TransliterationTable {
        let mut table = TransliterationTable::builtin();
        table.merge(&self.transliteration);
        table
    }
}

/// Shared visual identity of every artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingSettings {
    /// Used when a request names no service, and as the PDF creator
    pub product_name: String,
    pub accent_color: Rgb,
    /// Link labels printed in every footer
    pub footer_links: Vec<FooterLink>,
}

impl Default for BrandingSettings {
    fn default() -> Self {
        Self {
            product_name: "CV Export".to_string(),
            accent_color: Rgb::new(0x25, 0x63, 0xEB),
            footer_links: vec![
                FooterLink::new("Website", "https://example.com"),
                FooterLink::new("Guides", "https://example.com/guides"),
            ],
        }
    }
}

/// Settings manager for loading and saving export settings
pub struct SettingsManager {
    settings_path: PathBuf,
    current: ExportSettings,
}

impl SettingsManager {
    /// Manager for the settings file inside `app_data_dir`
    pub fn new(app_data_dir: impl AsRef<Path>) -> Self {
        Self::with_path(app_data_dir.as_ref().join(SETTINGS_FILE_NAME))
    }

    /// Manager for an explicit settings file
    pub fn with_path(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            current: ExportSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub async fn load(&mut self) -> Result<&ExportSettings> {
        self.current = if tokio::fs::try_exists(&self.settings_path).await? {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            self.parse(&content)
        } else {
            ExportSettings::default()
        };
        Ok(&self.current)
    }

    pub fn load_sync(&mut self) -> Result<&ExportSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            self.parse(&content)
        } else {
            ExportSettings::default()
        };
        Ok(&self.current)
    }

    fn parse(&self, content: &str) -> ExportSettings {
        match serde_json::from_str::<ExportSettings>(content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %self.settings_path.display(),
                    "Failed to parse settings file, using defaults: {}",
                    e
                );
                ExportSettings::default()
            }
        }
    }

    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    pub fn get(&self) -> &ExportSettings {
        &self.current
    }

    /// Consume the manager, keeping the loaded settings
    pub fn into_settings(self) -> ExportSettings {
        self.current
    }

    pub async fn update(&mut self, settings: ExportSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    pub fn update_sync(&mut self, settings: ExportSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    pub async fn reset(&mut self) -> Result<&ExportSettings> {
        self.current = ExportSettings::default();
        self.save().await?;
        Ok(&self.current)
    }
}
