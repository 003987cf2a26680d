mod document_type;
mod extraction_result;
mod upload_request;

pub use document_type::{DocumentType, normalize_tag};
pub use extraction_result::ExtractionResult;
pub use upload_request::UploadRequest;
