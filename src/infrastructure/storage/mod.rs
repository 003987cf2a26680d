mod temp_staging;
mod temporary_artifact;

pub use temp_staging::{ARTIFACT_PREFIX, TempStaging};
pub use temporary_artifact::TemporaryArtifact;
