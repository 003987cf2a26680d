use std::path::PathBuf;

use crate::presentation::config::ExtractionSettings;

/// Which optional extractors this process can actually run. Probed once at
/// startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub docx: bool,
    pub pdf: bool,
    pub doc_converter: Option<PathBuf>,
}

impl Capabilities {
    pub fn detect(settings: &ExtractionSettings) -> Self {
        let doc_converter = match which::which(&settings.doc_converter) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(
                    program = %settings.doc_converter,
                    error = %e,
                    "Legacy Word converter not found, .doc uploads will be rejected"
                );
                None
            }
        };

        let capabilities = Self {
            docx: cfg!(feature = "docx"),
            pdf: cfg!(feature = "pdf"),
            doc_converter,
        };

        tracing::info!(
            docx = capabilities.docx,
            pdf = capabilities.pdf,
            doc_converter = capabilities.has_doc_converter(),
            "Extraction capabilities detected"
        );

        capabilities
    }

    pub fn has_doc_converter(&self) -> bool {
        self.doc_converter.is_some()
    }
}
