use std::path::Path;

use async_trait::async_trait;

/// Turns a staged file of one known format into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("missing dependency: {0} is not installed")]
    MissingCapability(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("failed to stage upload: {0}")]
    StagingFailed(String),
}

impl ExtractorError {
    /// Only an unsupported tag is the caller's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedType(_) => "unsupported_type",
            Self::MissingCapability(_) => "missing_capability",
            Self::ExtractionFailed(_) => "extraction_failed",
            Self::StagingFailed(_) => "staging_failed",
        }
    }
}
