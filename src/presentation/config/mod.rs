mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_DOC_CONVERTER, DEFAULT_PORT, ExtractionSettings, LoggingSettings,
    MULTIPART_OVERHEAD_BYTES, ServerSettings, Settings, UploadSettings,
};
