#[cfg(feature = "docx")]
mod docx_adapter;
mod extractor_factory;
mod extractor_registry;
mod legacy_word_adapter;
mod markdown_adapter;
#[cfg(feature = "pdf")]
mod pdf_adapter;
mod plain_text_adapter;
mod unavailable_extractor;

#[cfg(feature = "docx")]
pub use docx_adapter::DocxAdapter;
pub use extractor_factory::{DOCX_DEPENDENCY, ExtractorFactory, PDF_DEPENDENCY};
pub use extractor_registry::ExtractorRegistry;
pub use legacy_word_adapter::LegacyWordAdapter;
pub use markdown_adapter::MarkdownAdapter;
#[cfg(feature = "pdf")]
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use unavailable_extractor::UnavailableExtractor;
