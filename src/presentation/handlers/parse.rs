use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use bytes::Bytes;

use crate::domain::{ExtractionResult, UploadRequest};
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const FILE_FIELD: &str = "file";
pub const FILE_TYPE_FIELD: &str = "file_type";

pub async fn parse_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractionResult>, ApiError> {
    let request = read_upload(multipart, state.settings.upload.max_file_size_bytes()).await?;

    let result = state.parse_service.parse(request).await?;

    Ok(Json(result))
}

/// Collects the `file` and `file_type` fields in whatever order they arrive.
/// Unknown fields are skipped. A file longer than `max_file_bytes` is
/// rejected with 413.
async fn read_upload(
    mut multipart: Multipart,
    max_file_bytes: usize,
) -> Result<UploadRequest, ApiError> {
    let mut data: Option<Bytes> = None;
    let mut file_type: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(ApiError::new(
                    e.status(),
                    format!("failed to read multipart: {e}"),
                ));
            }
        };

        match field.name() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to read file bytes");
                    ApiError::new(e.status(), format!("failed to read file: {e}"))
                })?;
                tracing::debug!(filename = %filename, bytes = bytes.len(), "File data received");
                if bytes.len() > max_file_bytes {
                    tracing::warn!(
                        bytes = bytes.len(),
                        max_file_bytes,
                        "Upload exceeds size limit"
                    );
                    return Err(ApiError::new(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        format!("file exceeds the {max_file_bytes} byte limit"),
                    ));
                }
                data = Some(bytes);
            }
            Some(FILE_TYPE_FIELD) => {
                let value = field.text().await.map_err(|e| {
                    ApiError::new(e.status(), format!("failed to read {FILE_TYPE_FIELD}: {e}"))
                })?;
                file_type = Some(value);
            }
            other => tracing::debug!(field = ?other, "Ignoring multipart field"),
        }
    }

    let data = data.ok_or_else(|| ApiError::missing_field(FILE_FIELD))?;
    let file_type = file_type.ok_or_else(|| ApiError::missing_field(FILE_TYPE_FIELD))?;

    Ok(UploadRequest::new(data, file_type))
}
