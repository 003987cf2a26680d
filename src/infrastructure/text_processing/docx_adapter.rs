use std::path::{Path, PathBuf};

use async_trait::async_trait;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::application::ports::{ExtractorError, TextExtractor};

#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_paragraphs(path: &Path) -> Result<String, ExtractorError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ExtractorError::ExtractionFailed(format!("failed to read file: {e}")))?;

        let docx = docx_rs::read_docx(&bytes)
            .map_err(|e| ExtractorError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?;

        // Empty paragraphs are kept so blank lines survive.
        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        tracing::info!(paragraphs = paragraphs.len(), "DOCX text extraction complete");

        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractorError> {
        let path: PathBuf = path.to_path_buf();

        tokio::task::spawn_blocking(move || Self::extract_paragraphs(&path))
            .await
            .map_err(|e| ExtractorError::ExtractionFailed(format!("task join error: {e}")))?
    }
}
