use std::path::PathBuf;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::environment::Environment;

pub const DEFAULT_PORT: u16 = 4002;
pub const DEFAULT_DOC_CONVERTER: &str = "antiword";
/// Room for multipart boundaries, part headers and the `file_type` field.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub upload: UploadSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
    pub staging_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    /// Program used for legacy `.doc` files. Resolved on `PATH` at startup.
    pub doc_converter: String,
    /// Arguments placed before the file path.
    #[serde(default)]
    pub doc_converter_args: Vec<String>,
}

impl Settings {
    /// Defaults, then `appsettings.{environment}`, then `APP__` variables,
    /// then the bare `PORT` variable.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("upload.max_file_size_mb", 10_i64)?
            .set_default("extraction.doc_converter", DEFAULT_DOC_CONVERTER)?
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?
            .try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                enable_json: false,
            },
            upload: UploadSettings {
                max_file_size_mb: 10,
                staging_dir: None,
            },
            extraction: ExtractionSettings {
                doc_converter: DEFAULT_DOC_CONVERTER.to_string(),
                doc_converter_args: Vec::new(),
            },
        }
    }
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Request body cap. The file itself is checked against
    /// `max_file_size_bytes` once it has been read.
    pub fn body_limit_bytes(&self) -> usize {
        self.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
