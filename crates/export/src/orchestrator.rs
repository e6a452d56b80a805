//! Export orchestration
//!
//! Validates a call, builds the request, dispatches it to exactly one
//! generator on the blocking pool, and offers the artifact to the sink.

use crate::{
    ExportError, ExportFormat, ExportOptions, ExportRequest, FormatGenerator, GeneratorRegistry,
    Result,
};
use chrono::Local;
use std::sync::Arc;
use store::{Artifact, DownloadSink, ExportSettings};

pub struct ExportOrchestrator {
    registry: GeneratorRegistry,
    sink: Arc<dyn DownloadSink>,
    product_name: String,
}

impl ExportOrchestrator {
    /// Orchestrator with the built-in generators
    pub fn new(settings: &ExportSettings, sink: Arc<dyn DownloadSink>) -> Self {
        Self::with_registry(
            GeneratorRegistry::with_defaults(settings),
            sink,
            settings.branding.product_name.clone(),
        )
    }

    pub fn with_registry(
        registry: GeneratorRegistry,
        sink: Arc<dyn DownloadSink>,
        product_name: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            sink,
            product_name: product_name.into(),
        }
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Export `content` in the named format
    ///
    /// Blank content and unknown or unregistered formats are rejected with
    /// `Ok(false)` and nothing is offered to the sink.
    pub async fn generate(&self, content: &str, format: &str, options: &ExportOptions) -> Result<bool> {
        let outcome = match format.parse::<ExportFormat>() {
            Ok(format) => self.run(content, format, options).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(artifact) => {
                tracing::info!(
                    format = %format,
                    file = %artifact.file_name,
                    bytes = artifact.len(),
                    "export complete"
                );
                Ok(true)
            }
            Err(ExportError::InvalidInput(reason)) => {
                tracing::warn!(format = %format, "export rejected: {}", reason);
                Ok(false)
            }
            Err(e) => {
                tracing::error!(format = %format, "export failed: {}", e);
                Err(e)
            }
        }
    }

    /// Typed entry point
    pub async fn generate_format(
        &self,
        content: &str,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> Result<bool> {
        self.generate(content, format.as_str(), options).await
    }

    pub async fn to_pdf(&self, content: &str, options: &ExportOptions) -> Result<bool> {
        self.generate_format(content, ExportFormat::Pdf, options).await
    }

    pub async fn to_word(&self, content: &str, options: &ExportOptions) -> Result<bool> {
        self.generate_format(content, ExportFormat::Word, options).await
    }

    pub async fn to_markdown(&self, content: &str, options: &ExportOptions) -> Result<bool> {
        self.generate_format(content, ExportFormat::Markdown, options).await
    }

    async fn run(&self, content: &str, format: ExportFormat, options: &ExportOptions) -> Result<Artifact> {
        if content.trim().is_empty() {
            return Err(ExportError::InvalidInput("content is empty".to_string()));
        }
        let generator = self.registry.get(format).ok_or_else(|| {
            ExportError::InvalidInput(format!("no generator registered for {}", format))
        })?;

        let request = ExportRequest::new(content, format, options, &self.product_name, Local::now());
        let file_name = request.artifact_name();
        let bytes = generate_blocking(generator, request).await?;

        let artifact = Artifact::new(file_name, format.media_type(), bytes);
        let sink = Arc::clone(&self.sink);
        tokio::task::spawn_blocking(move || sink.offer(&artifact).map(|()| artifact))
            .await
            .map_err(|e| ExportError::generation(format, e))?
            .map_err(|e| ExportError::generation(format, e))
    }
}

async fn generate_blocking(generator: Arc<dyn FormatGenerator>, request: ExportRequest) -> Result<Vec<u8>> {
    let format = request.format;
    tokio::task::spawn_blocking(move || generator.generate(&request))
        .await
        .map_err(|e| ExportError::generation(format, e))?
        .map_err(|e| ExportError::generation(format, e))
}
