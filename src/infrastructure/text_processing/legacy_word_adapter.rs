use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ExtractorError, TextExtractor};

/// Converts legacy `.doc` files by running an external converter and
/// capturing its stdout. The file path is passed as its own argument, never
/// through a shell.
pub struct LegacyWordAdapter {
    program: String,
    args: Vec<String>,
    resolved: Option<PathBuf>,
}

impl LegacyWordAdapter {
    /// `resolved` is the program location found at startup. `None` means the
    /// converter was not on `PATH` and every call fails fast.
    pub fn new(program: impl Into<String>, args: Vec<String>, resolved: Option<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            resolved,
        }
    }

    fn missing(&self) -> ExtractorError {
        ExtractorError::MissingCapability(self.program.clone())
    }
}

#[async_trait]
impl TextExtractor for LegacyWordAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(program = %self.program, path = %path.display())
    )]
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractorError> {
        let executable = self.resolved.as_ref().ok_or_else(|| self.missing())?;

        let output = Command::new(executable)
            .args(&self.args)
            .arg(path)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => self.missing(),
                _ => ExtractorError::ExtractionFailed(format!(
                    "failed to run {}: {e}",
                    self.program
                )),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(
                status = %output.status,
                stderr = %stderr,
                "Converter exited with failure"
            );
            let detail = if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            };
            return Err(ExtractorError::ExtractionFailed(detail));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
