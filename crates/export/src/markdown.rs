//! Markdown generator

use crate::{ExportFormat, ExportRequest, FormatGenerator};
use store::MarkdownSerializer;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownGenerator {
    serializer: MarkdownSerializer,
}

impl MarkdownGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormatGenerator for MarkdownGenerator {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn generate(&self, request: &ExportRequest) -> anyhow::Result<Vec<u8>> {
        Ok(self
            .serializer
            .serialize(&request.meta, &request.content)
            .into_bytes())
    }
}
