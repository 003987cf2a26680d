use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractorError, TextExtractor};

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<String, ExtractorError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractorError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut text = String::new();

        for page_index in 0..page_count {
            let page_text = doc.extract_text(page_index).map_err(|e| {
                ExtractorError::ExtractionFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;
            text.push_str(&page_text);
            text.push('\n');
        }

        tracing::info!(page_count, "PDF text extraction complete");

        Ok(text)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractorError> {
        let path: PathBuf = path.to_path_buf();

        tokio::task::spawn_blocking(move || Self::extract_pages(&path))
            .await
            .map_err(|e| ExtractorError::ExtractionFailed(format!("task join error: {e}")))?
    }
}
