//! Download sinks
//!
//! A finished artifact is offered to a sink exactly once. `FileSink` writes
//! into a directory through a temporary file that is renamed into place, so
//! a half-written artifact is never visible under its final name.

use crate::{Result, StoreError};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Generated bytes with the name and media type they are offered under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub file_name: String,
    pub media_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Receiver for finished artifacts
pub trait DownloadSink: Send + Sync {
    fn offer(&self, artifact: &Artifact) -> Result<()>;
}

/// Writes artifacts into a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final location of an artifact
    pub fn path_for(&self, artifact: &Artifact) -> Result<PathBuf> {
        let name = Path::new(&artifact.file_name);
        match name.file_name() {
            Some(base) if base == name.as_os_str() => Ok(self.dir.join(base)),
            _ => Err(StoreError::InvalidFormat(format!(
                "artifact name is not a plain file name: {}",
                artifact.file_name
            ))),
        }
    }
}

impl DownloadSink for FileSink {
    fn offer(&self, artifact: &Artifact) -> Result<()> {
        let target = self.path_for(artifact)?;
        std::fs::create_dir_all(&self.dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&artifact.bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target)?;

        tracing::info!(
            path = %target.display(),
            bytes = artifact.len(),
            "artifact written"
        );
        Ok(())
    }
}

/// Keeps artifacts in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Mutex<Vec<Artifact>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything offered so far, in order
    pub fn artifacts(&self) -> Vec<Artifact> {
        match self.artifacts.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.artifacts.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DownloadSink for MemorySink {
    fn offer(&self, artifact: &Artifact) -> Result<()> {
        let mut guard = match self.artifacts.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn artifact(name: &str) -> Artifact {
        Artifact::new(name, "text/markdown", b"# Title\n".to_vec())
    }

    #[test]
    fn test_file_sink_writes_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileSink::new(temp_dir.path().join("downloads"));
        sink.offer(&artifact("cv-review.md")).unwrap();

        let written = std::fs::read(temp_dir.path().join("downloads/cv-review.md")).unwrap();
        assert_eq!(written, b"# Title\n");

        let entries = std::fs::read_dir(temp_dir.path().join("downloads")).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_file_sink_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileSink::new(temp_dir.path());
        sink.offer(&artifact("notes.md")).unwrap();
        sink.offer(&Artifact::new("notes.md", "text/markdown", b"second".to_vec())).unwrap();
        assert_eq!(std::fs::read(temp_dir.path().join("notes.md")).unwrap(), b"second");
    }

    #[test]
    fn test_file_sink_rejects_paths() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileSink::new(temp_dir.path());
        for name in ["../escape.md", "nested/file.md", ""] {
            assert!(matches!(
                sink.offer(&artifact(name)),
                Err(StoreError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.offer(&artifact("a.md")).unwrap();
        sink.offer(&artifact("b.md")).unwrap();
        let names: Vec<String> = sink.artifacts().into_iter().map(|a| a.file_name).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_artifact_json_omits_bytes() {
        let json = serde_json::to_string(&artifact("x.md")).unwrap();
        assert_eq!(json, r#"{"fileName":"x.md","mediaType":"text/markdown"}"#);
    }
}
