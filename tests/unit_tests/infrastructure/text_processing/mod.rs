#[cfg(feature = "docx")]
mod docx_adapter_test;
#[cfg(feature = "pdf")]
mod pdf_adapter_test;
mod plain_text_adapter_test;

use std::path::PathBuf;

use tempfile::TempDir;

/// Writes `data` to a file named `name` inside a fresh temp dir.
pub(crate) fn write_fixture(name: &str, data: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    (dir, path)
}
