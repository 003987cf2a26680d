use docsift::application::ports::TextExtractor;
use docsift::infrastructure::text_processing::{MarkdownAdapter, PlainTextAdapter};

use super::write_fixture;

#[tokio::test]
async fn given_valid_utf8_file_when_extracting_then_returns_string() {
    let text = "Hello, this is plain text. ünïcode";
    let (_dir, path) = write_fixture("readme.txt", text.as_bytes());

    let result = PlainTextAdapter.extract_text(&path).await;

    assert_eq!(result.unwrap(), text);
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_then_replaces_them() {
    let (_dir, path) = write_fixture("broken.txt", &[b'o', b'k', 0xFF, 0xFE]);

    let result = PlainTextAdapter.extract_text(&path).await.unwrap();

    assert_eq!(result, "ok\u{FFFD}\u{FFFD}");
}

#[tokio::test]
async fn given_empty_file_when_extracting_then_returns_empty_string() {
    let (_dir, path) = write_fixture("empty.txt", b"");

    let result = PlainTextAdapter.extract_text(&path).await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn given_markdown_when_extracting_then_returns_source_verbatim() {
    let source = "# Title\n\n* item with **bold**\n\n```rust\nfn main() {}\n```\n";
    let (_dir, path) = write_fixture("notes.md", source.as_bytes());

    let result = MarkdownAdapter.extract_text(&path).await.unwrap();

    assert_eq!(result, source);
}

#[tokio::test]
async fn given_missing_file_when_extracting_then_returns_extraction_failed() {
    let (dir, _) = write_fixture("present.txt", b"x");
    let missing = dir.path().join("absent.txt");

    let result = PlainTextAdapter.extract_text(&missing).await;

    assert!(matches!(
        result,
        Err(docsift::application::ports::ExtractorError::ExtractionFailed(_))
    ));
}
