use serde::Serialize;

/// Flattened plain text pulled out of one upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub content: String,
}

impl ExtractionResult {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}
