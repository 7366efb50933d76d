//! Text Extractor: turns an uploaded document into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; production uses `PdfTextExtractor`.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError>;
}

/// Extracts text from PDF bytes with `pdf-extract`.
///
/// Parsing runs on the blocking pool. A panic inside the parser surfaces as a
/// failed join and is reported as an extraction error.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError> {
        let size = document.len();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
            .await
            .map_err(|e| AppError::Extraction(format!("PDF parser aborted: {e}")))?
            .map_err(|e| AppError::Extraction(format!("Failed to parse PDF: {e}")))?;

        debug!("Extracted {} chars from {size}-byte PDF", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_pdf_bytes_fail_with_extraction_error() {
        let result = PdfTextExtractor
            .extract_text(Bytes::from_static(b"Skills: Rust, Docker"))
            .await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_truncated_pdf_fails_with_extraction_error() {
        let result = PdfTextExtractor
            .extract_text(Bytes::from_static(b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog"))
            .await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_empty_upload_fails_with_extraction_error() {
        let result = PdfTextExtractor.extract_text(Bytes::new()).await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
