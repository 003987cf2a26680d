use std::sync::Arc;

use crate::application::ports::TextExtractor;
use crate::domain::DocumentType;
use crate::infrastructure::capabilities::Capabilities;
use crate::presentation::config::ExtractionSettings;

use super::extractor_registry::ExtractorRegistry;
use super::legacy_word_adapter::LegacyWordAdapter;
use super::markdown_adapter::MarkdownAdapter;
use super::plain_text_adapter::PlainTextAdapter;
use super::unavailable_extractor::UnavailableExtractor;

pub const DOCX_DEPENDENCY: &str = "docx-rs";
pub const PDF_DEPENDENCY: &str = "pdf_oxide";

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Registers one extractor per supported type. Types whose capability flag
    /// is off get an extractor that reports the missing dependency per request.
    pub fn create(
        settings: &ExtractionSettings,
        capabilities: &Capabilities,
    ) -> ExtractorRegistry {
        let plain_text: Arc<dyn TextExtractor> = Arc::new(PlainTextAdapter);
        let markdown: Arc<dyn TextExtractor> = Arc::new(MarkdownAdapter);
        let legacy_word: Arc<dyn TextExtractor> = Arc::new(LegacyWordAdapter::new(
            settings.doc_converter.clone(),
            settings.doc_converter_args.clone(),
            capabilities.doc_converter.clone(),
        ));

        ExtractorRegistry::new(vec![
            (DocumentType::Txt, plain_text),
            (DocumentType::Md, markdown),
            (DocumentType::Docx, docx_extractor(capabilities.docx)),
            (DocumentType::Doc, legacy_word),
            (DocumentType::Pdf, pdf_extractor(capabilities.pdf)),
        ])
    }
}

#[cfg(feature = "docx")]
fn docx_extractor(available: bool) -> Arc<dyn TextExtractor> {
    if available {
        Arc::new(super::docx_adapter::DocxAdapter::new())
    } else {
        Arc::new(UnavailableExtractor::new(DOCX_DEPENDENCY))
    }
}

#[cfg(not(feature = "docx"))]
fn docx_extractor(_available: bool) -> Arc<dyn TextExtractor> {
    Arc::new(UnavailableExtractor::new(DOCX_DEPENDENCY))
}

#[cfg(feature = "pdf")]
fn pdf_extractor(available: bool) -> Arc<dyn TextExtractor> {
    if available {
        Arc::new(super::pdf_adapter::PdfAdapter::new())
    } else {
        Arc::new(UnavailableExtractor::new(PDF_DEPENDENCY))
    }
}

#[cfg(not(feature = "pdf"))]
fn pdf_extractor(_available: bool) -> Arc<dyn TextExtractor> {
    Arc::new(UnavailableExtractor::new(PDF_DEPENDENCY))
}
