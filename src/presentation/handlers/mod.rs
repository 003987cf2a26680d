mod error;
mod health;
mod parse;

pub use error::{ApiError, ErrorResponse};
pub use health::{LIVENESS_MESSAGE, health_handler, root_handler};
pub use parse::{FILE_FIELD, FILE_TYPE_FIELD, parse_handler};
