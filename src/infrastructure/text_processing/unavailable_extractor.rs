use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor};

/// Stands in for an extractor whose library was not compiled into this build.
pub struct UnavailableExtractor {
    dependency: &'static str,
}

impl UnavailableExtractor {
    pub fn new(dependency: &'static str) -> Self {
        Self { dependency }
    }
}

#[async_trait]
impl TextExtractor for UnavailableExtractor {
    async fn extract_text(&self, _path: &Path) -> Result<String, ExtractorError> {
        Err(ExtractorError::MissingCapability(self.dependency.to_string()))
    }
}
