use bytes::Bytes;
use tempfile::TempDir;

use docsift::domain::DocumentType;
use docsift::infrastructure::storage::{TempStaging, TemporaryArtifact};

fn create_test_staging() -> (TempDir, TempStaging) {
    let dir = TempDir::new().unwrap();
    let staging = TempStaging::new(dir.path().to_path_buf()).unwrap();
    (dir, staging)
}

#[tokio::test]
async fn given_upload_when_staging_then_file_holds_bytes_under_type_suffix() {
    let (_dir, staging) = create_test_staging();

    let artifact = staging
        .stage(Bytes::from_static(b"hello"), DocumentType::Docx)
        .await
        .unwrap();

    assert!(artifact.path().exists());
    assert_eq!(artifact.path().extension().unwrap(), "docx");
    assert_eq!(std::fs::read(artifact.path()).unwrap(), b"hello");
}

#[tokio::test]
async fn given_staged_artifact_when_dropped_then_file_is_removed() {
    let (dir, staging) = create_test_staging();

    let artifact = staging
        .stage(Bytes::from_static(b"bye"), DocumentType::Txt)
        .await
        .unwrap();
    let path = artifact.path().to_path_buf();
    drop(artifact);

    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_two_uploads_of_same_type_when_staging_then_names_are_unique() {
    let (_dir, staging) = create_test_staging();

    let first = staging
        .stage(Bytes::from_static(b"one"), DocumentType::Pdf)
        .await
        .unwrap();
    let second = staging
        .stage(Bytes::from_static(b"two"), DocumentType::Pdf)
        .await
        .unwrap();

    assert_ne!(first.path(), second.path());
}

#[test]
fn given_artifact_already_deleted_when_dropped_then_does_not_panic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone.txt");
    std::fs::write(&path, b"x").unwrap();
    let artifact = TemporaryArtifact::new(path.clone());

    std::fs::remove_file(&path).unwrap();
    drop(artifact);

    assert!(!path.exists());
}

#[test]
fn given_nested_missing_dir_when_creating_staging_then_dir_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let staging = TempStaging::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(staging.dir(), nested.as_path());
}
