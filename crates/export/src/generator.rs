//! Format generators and their registry

use crate::markdown::MarkdownGenerator;
use crate::pdf::PdfGenerator;
use crate::word::WordGenerator;
use crate::{ExportFormat, ExportRequest};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use store::ExportSettings;

/// Turns one request into artifact bytes
///
/// Implementations run on the blocking pool and must not keep per-call
/// state between calls.
pub trait FormatGenerator: Send + Sync {
    fn format(&self) -> ExportFormat;

    fn generate(&self, request: &ExportRequest) -> anyhow::Result<Vec<u8>>;
}

/// One generator per format
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<ExportFormat, Arc<dyn FormatGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// PDF, Word, and Markdown generators configured from `settings`
    pub fn with_defaults(settings: &ExportSettings) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfGenerator::new(settings)));
        registry.register(Arc::new(WordGenerator::new(settings)));
        registry.register(Arc::new(MarkdownGenerator::new()));
        registry
    }

    /// Register a generator under its own format, returning the one it replaces
    pub fn register(&mut self, generator: Arc<dyn FormatGenerator>) -> Option<Arc<dyn FormatGenerator>> {
        self.generators.insert(generator.format(), generator)
    }

    pub fn get(&self, format: ExportFormat) -> Option<Arc<dyn FormatGenerator>> {
        self.generators.get(&format).cloned()
    }

    pub fn formats(&self) -> Vec<ExportFormat> {
        self.generators.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}
