use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor};

use super::plain_text_adapter::read_lossy;

/// Returns Markdown source as-is. Nothing is rendered.
pub struct MarkdownAdapter;

#[async_trait]
impl TextExtractor for MarkdownAdapter {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractorError> {
        read_lossy(path).await
    }
}
