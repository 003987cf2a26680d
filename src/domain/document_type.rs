use std::fmt;

/// Formats the service knows how to turn into plain text.
///
/// The type is always taken from the caller-declared tag. File contents are
/// never sniffed, so a PDF uploaded as `.txt` is read as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Txt,
    Md,
    Docx,
    Doc,
    Pdf,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [Self::Txt, Self::Md, Self::Docx, Self::Doc, Self::Pdf];

    /// Parses a declared tag such as `.PDF`. Matching is exact on the
    /// lowercased tag, so `pdf` without the dot and ` .md ` are rejected.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match normalize_tag(tag).as_str() {
            ".txt" => Some(Self::Txt),
            ".md" => Some(Self::Md),
            ".docx" => Some(Self::Docx),
            ".doc" => Some(Self::Doc),
            ".pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => ".txt",
            Self::Md => ".md",
            Self::Docx => ".docx",
            Self::Doc => ".doc",
            Self::Pdf => ".pdf",
        }
    }

    pub fn supported_tags() -> String {
        Self::ALL
            .iter()
            .map(|t| t.extension())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
}
