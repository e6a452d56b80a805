//! Error types for export operations

use crate::ExportFormat;
use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Blank content or an unknown format; `generate` reports these as `Ok(false)`
    #[error("Invalid export input: {0}")]
    InvalidInput(String),

    #[error("{format} export failed: {source:#}")]
    Generation {
        format: ExportFormat,
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] StoreError),
}

impl ExportError {
    pub fn generation(format: ExportFormat, source: impl Into<anyhow::Error>) -> Self {
        ExportError::Generation {
            format,
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
