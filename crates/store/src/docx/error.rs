//! Error types for DOCX export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type DocxResult<T> = std::result::Result<T, DocxError>;
