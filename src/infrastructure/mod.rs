pub mod capabilities;
pub mod observability;
pub mod storage;
pub mod text_processing;

pub use capabilities::Capabilities;
