use docsift::application::ports::{ExtractorError, TextExtractor};
use docsift::infrastructure::text_processing::PdfAdapter;

use super::write_fixture;

#[tokio::test]
async fn given_valid_pdf_when_extracting_then_each_page_ends_with_newline() {
    let (_dir, path) = write_fixture("sample.pdf", include_bytes!("../../../fixtures/sample.pdf"));

    let text = PdfAdapter::new().extract_text(&path).await.unwrap();

    assert!(text.contains("Hello"), "unexpected text: {text:?}");
    assert!(text.contains("Second"), "unexpected text: {text:?}");
    assert!(text.matches('\n').count() >= 2);
    assert!(text.ends_with('\n'));
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let (_dir, path) = write_fixture("corrupt.pdf", b"not a pdf at all");

    let result = PdfAdapter::new().extract_text(&path).await;

    assert!(matches!(result, Err(ExtractorError::ExtractionFailed(_))));
}
