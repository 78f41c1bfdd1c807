//! Text sources: turn a file on disk or an uploaded buffer into plain text.
//!
//! Both implement `TextSource`; the analyzer only ever sees the resulting string.
//! Extraction failures are errors, never text, so they cannot be scored as if
//! they were document content.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format for '{0}': upload a .pdf or .txt file")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from PDF '{name}': {message}")]
    Pdf { name: String, message: String },

    #[error("'{0}' is not valid UTF-8 text")]
    Encoding(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
}

impl DocumentFormat {
    /// Files on disk: `.pdf` is a PDF, anything else is read as text.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentFormat::Pdf,
            _ => DocumentFormat::PlainText,
        }
    }

    /// Uploads must be `.pdf` or `.txt`.
    pub fn for_upload(file_name: &str) -> Result<Self, ExtractionError> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(DocumentFormat::Pdf)
        } else if lower.ends_with(".txt") {
            Ok(DocumentFormat::PlainText)
        } else {
            Err(ExtractionError::UnsupportedFormat(file_name.to_string()))
        }
    }
}

/// Anything that can produce the text of one document.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Human-readable name for logs and error messages.
    fn name(&self) -> &str;

    async fn read_text(&self) -> Result<String, ExtractionError>;
}

/// A document on the local filesystem.
#[derive(Debug, Clone)]
pub struct PathSource {
    path: PathBuf,
    display: String,
}

impl PathSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl TextSource for PathSource {
    fn name(&self) -> &str {
        &self.display
    }

    async fn read_text(&self) -> Result<String, ExtractionError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ExtractionError::NotFound(self.path.clone())
            } else {
                ExtractionError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        decode(DocumentFormat::for_path(&self.path), &self.display, Bytes::from(bytes)).await
    }
}

/// An in-memory upload, identified by its original file name.
#[derive(Debug, Clone)]
pub struct BufferSource {
    file_name: String,
    bytes: Bytes,
}

impl BufferSource {
    pub fn new(file_name: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[async_trait]
impl TextSource for BufferSource {
    fn name(&self) -> &str {
        &self.file_name
    }

    async fn read_text(&self) -> Result<String, ExtractionError> {
        let format = DocumentFormat::for_upload(&self.file_name)?;
        decode(format, &self.file_name, self.bytes.clone()).await
    }
}

async fn decode(format: DocumentFormat, name: &str, bytes: Bytes) -> Result<String, ExtractionError> {
    debug!("Decoding '{name}' ({} bytes) as {format:?}", bytes.len());
    match format {
        DocumentFormat::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|_| ExtractionError::Encoding(name.to_string())),
        DocumentFormat::Pdf => {
            // pdf-extract is synchronous and may panic on malformed input.
            let result =
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                    .await;
            match result {
                Ok(Ok(text)) => Ok(text),
                Ok(Err(e)) => Err(ExtractionError::Pdf {
                    name: name.to_string(),
                    message: e.to_string(),
                }),
                Err(e) => Err(ExtractionError::Pdf {
                    name: name.to_string(),
                    message: format!("extractor aborted: {e}"),
                }),
            }
        }
    }
}
