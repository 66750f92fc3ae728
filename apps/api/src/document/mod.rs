// Document intake: the uploaded file and the text extractor that consumes it.
// Parsing is delegated to pdf-extract; nothing here interprets PDF structure.

pub mod extractor;

use bytes::Bytes;

pub use extractor::{extract_text, ExtractError};

/// A resume file as received from the client. Consumed once by the extractor.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
