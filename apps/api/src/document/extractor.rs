//! Document Text Extractor: turns an uploaded PDF into one string.
//!
//! Page texts are concatenated in page order with no separator and no
//! page-boundary markers. Image-only pages contribute nothing; there is no OCR.

use thiserror::Error;
use tracing::debug;

use super::UploadedDocument;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No document uploaded")]
    NoDocument,

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("Extraction worker failed: {0}")]
    Worker(String),
}

/// Extracts the text of every page of `document` and joins it.
///
/// PDF parsing is CPU-bound and may panic on hostile input, so it runs inside
/// `spawn_blocking`; a panic surfaces as `ExtractError::Worker`.
pub async fn extract_text(document: Option<&UploadedDocument>) -> Result<String, ExtractError> {
    let document = document.ok_or(ExtractError::NoDocument)?;
    let bytes = document.bytes.clone();

    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })
    .await
    .map_err(|e| ExtractError::Worker(e.to_string()))?
    .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    debug!(
        "Extracted {} page(s) from '{}' ({} bytes, content type {})",
        pages.len(),
        document.filename,
        document.size(),
        document.content_type.as_deref().unwrap_or("unknown")
    );

    Ok(concat_pages(pages))
}

/// Joins page texts in order with no inserted separators.
pub fn concat_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages.into_iter().fold(String::new(), |mut text, page| {
        text.push_str(page.as_ref());
        text
    })
}
