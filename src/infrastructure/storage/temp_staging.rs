use std::io::Write;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::application::ports::ExtractorError;
use crate::domain::DocumentType;

use super::temporary_artifact::TemporaryArtifact;

pub const ARTIFACT_PREFIX: &str = "upload-";

/// Directory where uploads are materialized for the duration of one request.
#[derive(Debug, Clone)]
pub struct TempStaging {
    dir: PathBuf,
}

impl TempStaging {
    pub fn new(dir: PathBuf) -> Result<Self, ExtractorError> {
        std::fs::create_dir_all(&dir).map_err(|e| {
            ExtractorError::StagingFailed(format!(
                "failed to create staging dir {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the whole upload to a uniquely named file whose suffix is the
    /// declared type's extension.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn stage(
        &self,
        data: Bytes,
        document_type: DocumentType,
    ) -> Result<TemporaryArtifact, ExtractorError> {
        let dir = self.dir.clone();

        tokio::task::spawn_blocking(move || write_artifact(&dir, &data, document_type))
            .await
            .map_err(|e| ExtractorError::StagingFailed(format!("task join error: {e}")))?
    }
}

fn write_artifact(
    dir: &Path,
    data: &[u8],
    document_type: DocumentType,
) -> Result<TemporaryArtifact, ExtractorError> {
    let mut file = tempfile::Builder::new()
        .prefix(ARTIFACT_PREFIX)
        .suffix(document_type.extension())
        .tempfile_in(dir)
        .map_err(|e| ExtractorError::StagingFailed(format!("failed to create temp file: {e}")))?;

    file.write_all(data)
        .and_then(|_| file.flush())
        .map_err(|e| ExtractorError::StagingFailed(format!("failed to write temp file: {e}")))?;

    // Ownership of deletion moves to the artifact from here on.
    let path = file
        .into_temp_path()
        .keep()
        .map_err(|e| ExtractorError::StagingFailed(e.to_string()))?;

    tracing::debug!(path = %path.display(), "Upload staged");

    Ok(TemporaryArtifact::new(path))
}
