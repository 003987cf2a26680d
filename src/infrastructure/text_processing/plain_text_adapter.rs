use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor};

pub struct PlainTextAdapter;

#[async_trait]
impl TextExtractor for PlainTextAdapter {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractorError> {
        read_lossy(path).await
    }
}

/// Reads the file as UTF-8, replacing undecodable bytes with U+FFFD.
pub(super) async fn read_lossy(path: &Path) -> Result<String, ExtractorError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ExtractorError::ExtractionFailed(format!("failed to read file: {e}")))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
