//! Export options and the per-call request

use crate::ExportFormat;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use store::ArtifactMeta;

pub const DEFAULT_TITLE: &str = "Document";
pub const DEFAULT_FILE_NAME: &str = "document";

/// Caller-supplied options, all optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub title: Option<String>,
    /// Falls back to the configured product name
    pub service_name: Option<String>,
    /// File name without extension
    pub file_name: Option<String>,
    pub metadata: Option<ExportMetadata>,
}

/// Scores produced upstream by the analysing service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportMetadata {
    /// 0 to 100
    pub score: Option<f64>,
    pub grade: Option<String>,
    pub improvement_percent: Option<f64>,
}

impl ExportOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_metadata(mut self, metadata: ExportMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(DEFAULT_TITLE)
    }

    pub fn service_name<'a>(&'a self, product_name: &'a str) -> &'a str {
        non_blank(self.service_name.as_deref()).unwrap_or(product_name)
    }

    /// File stem with path separators replaced
    pub fn file_stem(&self) -> String {
        match non_blank(self.file_name.as_deref()) {
            Some(name) => name
                .chars()
                .map(|c| if matches!(c, '/' | '\\') || c.is_control() { '-' } else { c })
                .collect(),
            None => DEFAULT_FILE_NAME.to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// One export call: built by the orchestrator, consumed by one generator
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub content: String,
    pub format: ExportFormat,
    pub meta: ArtifactMeta,
    pub file_stem: String,
}

impl ExportRequest {
    pub fn new(
        content: impl Into<String>,
        format: ExportFormat,
        options: &ExportOptions,
        product_name: &str,
        generated_at: DateTime<Local>,
    ) -> Self {
        let mut meta = ArtifactMeta::new(
            options.title(),
            options.service_name(product_name),
            generated_at,
        );
        if let Some(metadata) = &options.metadata {
            meta.score = metadata.score;
            meta.grade = metadata.grade.clone();
            meta.improvement_percent = metadata.improvement_percent;
        }

        Self {
            content: content.into(),
            format,
            meta,
            file_stem: options.file_stem(),
        }
    }

    /// `"{file_stem}.{extension}"`
    pub fn artifact_name(&self) -> String {
        format!("{}.{}", self.file_stem, self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.title(), "Document");
        assert_eq!(options.service_name("CV Export"), "CV Export");
        assert_eq!(options.file_stem(), "document");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let options = ExportOptions::new("  ").with_service_name("").with_file_name(" ");
        assert_eq!(options.title(), "Document");
        assert_eq!(options.service_name("CV Export"), "CV Export");
        assert_eq!(options.file_stem(), "document");
    }

    #[test]
    fn test_file_stem_strips_separators() {
        let options = ExportOptions::default().with_file_name("../cv/final");
        assert_eq!(options.file_stem(), "..-cv-final");
    }

    #[test]
    fn test_camel_case_json() {
        let json = r#"{
            "title": "CV Review",
            "serviceName": "Resume Analysis",
            "fileName": "cv-review",
            "metadata": { "score": 82, "grade": "B", "improvementPercent": 12.5 }
        }"#;
        let options: ExportOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.file_stem(), "cv-review");
        let metadata = options.metadata.unwrap();
        assert_eq!(metadata.score, Some(82.0));
        assert_eq!(metadata.improvement_percent, Some(12.5));
    }

    #[test]
    fn test_request_carries_metadata() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        let options = ExportOptions::new("CV Review")
            .with_file_name("cv-review")
            .with_metadata(ExportMetadata {
                score: Some(82.0),
                grade: Some("B".to_string()),
                improvement_percent: None,
            });
        let request = ExportRequest::new("# Body", ExportFormat::Word, &options, "CV Export", at);
        assert_eq!(request.artifact_name(), "cv-review.docx");
        assert_eq!(request.meta.service_name, "CV Export");
        assert_eq!(request.meta.score_text().as_deref(), Some("82/100 (B)"));
        assert_eq!(request.meta.improvement_text(), None);
    }
}
