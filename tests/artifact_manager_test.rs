use limbic::{ArtifactManager, BuiltinArtifact};
use std::fs;

#[tokio::test]
async fn test_artifact_paths() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let manager = ArtifactManager::new(dir.path())?;
    let path = manager.get_artifact_path(BuiltinArtifact::Emotions);

    assert!(path.ends_with("emotions-lr/artifact.json"));
    Ok(())
}

#[tokio::test]
async fn test_missing_artifact_is_not_downloaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let manager = ArtifactManager::new(dir.path())?;

    assert!(!manager.is_downloaded(BuiltinArtifact::Emotions));
    assert!(!manager.verify_artifact(BuiltinArtifact::Emotions)?);
    Ok(())
}

#[tokio::test]
async fn test_verification_rejects_corrupt_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let manager = ArtifactManager::new(dir.path())?;
    let path = manager.get_artifact_path(BuiltinArtifact::Emotions);

    fs::create_dir_all(path.parent().unwrap())?;
    fs::write(&path, "corrupted data")?;

    assert!(manager.is_downloaded(BuiltinArtifact::Emotions));
    assert!(!manager.verify_artifact(BuiltinArtifact::Emotions)?);
    Ok(())
}

#[tokio::test]
async fn test_remove_download() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let manager = ArtifactManager::new(dir.path())?;
    let path = manager.get_artifact_path(BuiltinArtifact::Emotions);

    fs::create_dir_all(path.parent().unwrap())?;
    fs::write(&path, "data")?;
    assert!(manager.is_downloaded(BuiltinArtifact::Emotions));

    manager.remove_download(BuiltinArtifact::Emotions)?;
    assert!(!manager.is_downloaded(BuiltinArtifact::Emotions));

    // Removing again is a no-op
    manager.remove_download(BuiltinArtifact::Emotions)?;
    Ok(())
}
