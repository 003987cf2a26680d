use std::sync::Arc;

use crate::application::ports::ExtractorError;
use crate::domain::{DocumentType, ExtractionResult, UploadRequest};
use crate::infrastructure::storage::TempStaging;
use crate::infrastructure::text_processing::ExtractorRegistry;

/// Dispatches one upload to the extractor for its declared type.
///
/// Every upload that passes the type check is written to its own temporary
/// file first. That file is removed when `parse` returns, on success and on
/// every error path.
pub struct ParseService {
    registry: Arc<ExtractorRegistry>,
    staging: TempStaging,
}

impl ParseService {
    pub fn new(registry: Arc<ExtractorRegistry>, staging: TempStaging) -> Self {
        Self { registry, staging }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(declared_type = %request.declared_type, bytes = request.size_bytes())
    )]
    pub async fn parse(&self, request: UploadRequest) -> Result<ExtractionResult, ExtractorError> {
        let normalized = request.normalized_type();
        let document_type = DocumentType::from_tag(&normalized).ok_or_else(|| {
            tracing::warn!(declared_type = %normalized, "Unsupported file type");
            ExtractorError::UnsupportedType(normalized.clone())
        })?;

        let artifact = self.staging.stage(request.data, document_type).await?;
        let extractor = self.registry.get(document_type)?;

        let content = extractor
            .extract_text(artifact.path())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    document_type = %document_type,
                    kind = e.kind(),
                    error = %e,
                    "Extraction failed"
                )
            })?;

        tracing::info!(
            document_type = %document_type,
            chars = content.chars().count(),
            "Extraction complete"
        );

        Ok(ExtractionResult::new(content))
    }
}
