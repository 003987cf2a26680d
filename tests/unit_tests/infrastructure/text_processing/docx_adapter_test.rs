use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use docsift::application::ports::{ExtractorError, TextExtractor};
use docsift::infrastructure::text_processing::DocxAdapter;

use super::write_fixture;

fn pack(docx: Docx) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

fn paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

#[tokio::test]
async fn given_three_paragraphs_when_extracting_then_joins_with_newline() {
    let bytes = pack(
        Docx::new()
            .add_paragraph(paragraph("A"))
            .add_paragraph(paragraph("B"))
            .add_paragraph(paragraph("C")),
    );
    let (_dir, path) = write_fixture("three.docx", &bytes);

    let result = DocxAdapter::new().extract_text(&path).await.unwrap();

    assert_eq!(result, "A\nB\nC");
}

#[tokio::test]
async fn given_paragraph_with_several_runs_when_extracting_then_runs_are_concatenated() {
    let bytes = pack(
        Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Hello, "))
                .add_run(Run::new().add_text("world").bold()),
        ),
    );
    let (_dir, path) = write_fixture("runs.docx", &bytes);

    let result = DocxAdapter::new().extract_text(&path).await.unwrap();

    assert_eq!(result, "Hello, world");
}

#[tokio::test]
async fn given_empty_paragraph_when_extracting_then_blank_line_is_kept() {
    let bytes = pack(
        Docx::new()
            .add_paragraph(paragraph("top"))
            .add_paragraph(Paragraph::new())
            .add_paragraph(paragraph("bottom")),
    );
    let (_dir, path) = write_fixture("gap.docx", &bytes);

    let result = DocxAdapter::new().extract_text(&path).await.unwrap();

    assert_eq!(result, "top\n\nbottom");
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_docx_then_returns_extraction_failed() {
    let (_dir, path) = write_fixture("corrupt.docx", b"definitely not a zip");

    let result = DocxAdapter::new().extract_text(&path).await;

    assert!(matches!(result, Err(ExtractorError::ExtractionFailed(_))));
}
