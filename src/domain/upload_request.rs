use bytes::Bytes;

use super::document_type::normalize_tag;

/// A single upload as received from the caller: raw bytes plus the type tag
/// they declared for it.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Bytes,
    pub declared_type: String,
}

impl UploadRequest {
    pub fn new(data: impl Into<Bytes>, declared_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            declared_type: declared_type.into(),
        }
    }

    pub fn normalized_type(&self) -> String {
        normalize_tag(&self.declared_type)
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
