use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{ExtractorError, TextExtractor};
use crate::domain::DocumentType;

pub struct ExtractorRegistry {
    adapters: HashMap<DocumentType, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    pub fn new(adapters: Vec<(DocumentType, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    pub fn get(
        &self,
        document_type: DocumentType,
    ) -> Result<Arc<dyn TextExtractor>, ExtractorError> {
        self.adapters
            .get(&document_type)
            .cloned()
            .ok_or_else(|| ExtractorError::UnsupportedType(document_type.to_string()))
    }
}
