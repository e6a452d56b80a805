//! Format guides and tooltips
//!
//! Guide text is injectable: a repository starts empty and is filled by
//! `load()` from a JSON catalog file or from the built-in catalog.

use crate::{ExportFormat, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use store::StoreError;

/// When and how to use one export format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatGuide {
    pub format: ExportFormat,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub best_for: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideCatalog {
    pub guides: Vec<FormatGuide>,
    /// Short hover texts keyed by UI element
    pub tooltips: BTreeMap<String, String>,
}

impl GuideCatalog {
    pub fn builtin() -> Self {
        let guide = |format, title: &str, description: &str, best_for: &[&str], tips: &[&str]| {
            FormatGuide {
                format,
                title: title.to_string(),
                description: description.to_string(),
                best_for: best_for.iter().map(|s| s.to_string()).collect(),
                tips: tips.iter().map(|s| s.to_string()).collect(),
            }
        };

        let guides = vec![
            guide(
                ExportFormat::Pdf,
                "PDF",
                "Fixed layout that looks the same on every device, with page numbers in the footer.",
                &["Submitting applications", "Printing", "Sharing a final version"],
                &[
                    "Accented letters are transliterated to plain ASCII",
                    "Long lines wrap automatically and pages break at the bottom margin",
                ],
            ),
            guide(
                ExportFormat::Word,
                "Word (DOCX)",
                "Editable document with native bullet lists and page numbers filled in by your word processor.",
                &["Further editing", "Recruiters who request Word files"],
                &["Footer links stay clickable", "Formatting marks are converted to plain paragraphs"],
            ),
            guide(
                ExportFormat::Markdown,
                "Markdown",
                "Your content exactly as written, preceded by a short metadata header.",
                &["Version control", "Pasting into other tools"],
                &["Nothing in the content is changed"],
            ),
        ];

        let tooltips = [
            ("pdf", "Download a print-ready PDF"),
            ("word", "Download an editable Word document"),
            ("markdown", "Download the raw Markdown"),
            ("score", "Overall score out of 100 from the latest analysis"),
            ("improvement", "Change in score since the previous version"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { guides, tooltips }
    }
}

/// Guide text source, loaded explicitly
#[derive(Debug, Default)]
pub struct GuideRepository {
    source: Option<PathBuf>,
    catalog: Option<GuideCatalog>,
}

impl GuideRepository {
    /// Repository that loads the built-in catalog
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Repository that loads a JSON catalog file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            catalog: None,
        }
    }

    pub async fn load(&mut self) -> Result<&GuideCatalog> {
        let catalog = match &self.source {
            Some(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .map_err(StoreError::from)?;
                let catalog: GuideCatalog =
                    serde_json::from_str(&content).map_err(StoreError::from)?;
                tracing::debug!(
                    path = %path.display(),
                    guides = catalog.guides.len(),
                    "guide catalog loaded"
                );
                catalog
            }
            None => GuideCatalog::builtin(),
        };
        Ok(self.catalog.insert(catalog))
    }

    /// Drop loaded guides; lookups return nothing until the next `load()`
    pub fn clear(&mut self) {
        self.catalog = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn guides(&self) -> &[FormatGuide] {
        self.catalog.as_ref().map(|c| c.guides.as_slice()).unwrap_or(&[])
    }

    pub fn guide(&self, format: ExportFormat) -> Option<&FormatGuide> {
        self.guides().iter().find(|g| g.format == format)
    }

    pub fn tooltip(&self, key: &str) -> Option<&str> {
        self.catalog
            .as_ref()
            .and_then(|c| c.tooltips.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_builtin_load_and_clear() {
        let mut repo = GuideRepository::builtin();
        assert!(repo.guide(ExportFormat::Pdf).is_none());

        repo.load().await.unwrap();
        assert!(repo.is_loaded());
        for format in ExportFormat::ALL {
            assert!(repo.guide(format).is_some(), "missing guide for {}", format);
        }
        assert!(repo.tooltip("markdown").is_some());

        repo.clear();
        assert!(!repo.is_loaded());
        assert!(repo.guides().is_empty());
        assert_eq!(repo.tooltip("markdown"), None);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("guides.json");
        std::fs::write(
            &path,
            r#"{ "guides": [ { "format": "word", "title": "Docx", "description": "Editable" } ],
                 "tooltips": { "word": "Get a .docx" } }"#,
        )
        .unwrap();

        let mut repo = GuideRepository::from_file(&path);
        repo.load().await.unwrap();
        assert_eq!(repo.guides().len(), 1);
        assert_eq!(repo.guide(ExportFormat::Word).unwrap().title, "Docx");
        assert!(repo.guide(ExportFormat::Word).unwrap().tips.is_empty());
        assert_eq!(repo.tooltip("word"), Some("Get a .docx"));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = GuideRepository::from_file(temp_dir.path().join("absent.json"));
        assert!(matches!(
            repo.load().await,
            Err(ExportError::Config(StoreError::Io(_)))
        ));
        assert!(!repo.is_loaded());
    }
}
