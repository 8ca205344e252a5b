//! Resume text extraction — the "PDF bytes → text" collaborator.
//!
//! The screening pipeline only sees the `TextExtractor` trait; the production
//! implementation wraps `pdf-extract`. Extraction is CPU-bound, so it runs
//! inside `tokio::task::spawn_blocking` to keep the async executor free while
//! a batch of uploads is being parsed.

use async_trait::async_trait;
use tracing::warn;

/// Extracts plain text from raw uploaded file bytes.
///
/// Contract: never errors. Malformed input, extraction failures, and
/// whitespace-only output all collapse to `None` — the caller decides what a
/// missing text means (for screening: skip that resume).
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: Vec<u8>) -> Option<String>;
}

/// Production extractor backed by `pdf_extract::extract_text_from_mem`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Vec<u8>) -> Option<String> {
        let result = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data)
        })
        .await;

        match result {
            Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
            Ok(Ok(_)) => {
                warn!("PDF extraction produced no text");
                None
            }
            Ok(Err(e)) => {
                warn!("PDF extraction failed: {e}");
                None
            }
            // A panic inside the extraction pass surfaces as a JoinError.
            // Corrupt PDFs must not take the request down, so it is a skip too.
            Err(e) => {
                warn!("PDF extraction task aborted: {e}");
                None
            }
        }
    }
}
