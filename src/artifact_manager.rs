use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

use crate::models::{ArtifactInfo, BuiltinArtifact};

#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("Artifact not downloaded: {0}")]
    NotDownloaded(String),
    #[error("Download error: {0}")]
    DownloadError(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Artifact verification failed")]
    VerificationFailed,
    #[error("Hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
}

/// Locates, downloads and verifies model artifact files in a local cache.
///
/// Downloads are serialized through an async mutex so concurrent callers
/// cannot write the same file at once.
#[derive(Clone)]
pub struct ArtifactManager {
    artifacts_dir: PathBuf,
    download_lock: Arc<Mutex<()>>,
}

impl ArtifactManager {
    /// Creates a new ArtifactManager with the default cache directory
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::get_default_artifacts_dir())
    }

    /// Returns the default artifacts directory path
    pub fn get_default_artifacts_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("LIMBIC_CACHE") {
            return PathBuf::from(path).join("artifacts");
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("limbic").join("artifacts");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("limbic").join("artifacts");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("limbic").join("artifacts")
    }

    pub fn new<P: AsRef<Path>>(artifacts_dir: P) -> io::Result<Self> {
        let artifacts_dir = artifacts_dir.as_ref().to_path_buf();
        fs::create_dir_all(&artifacts_dir)?;
        Ok(Self {
            artifacts_dir,
            download_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn get_artifact_path(&self, artifact: BuiltinArtifact) -> PathBuf {
        let info = artifact.get_artifact_info();
        self.artifacts_dir.join(info.name).join("artifact.json")
    }

    pub fn is_downloaded(&self, artifact: BuiltinArtifact) -> bool {
        let path = self.get_artifact_path(artifact);
        log::info!(
            "Checking if artifact is downloaded: {:?} (exists: {})",
            path,
            path.exists()
        );
        path.exists()
    }

    pub async fn download_artifact(&self, artifact: BuiltinArtifact) -> Result<(), ManagerError> {
        let info = artifact.get_artifact_info();
        let _lock = self.download_lock.lock().await;

        let artifact_dir = self.artifacts_dir.join(&info.name);
        log::info!("Creating artifact directory at {:?}", artifact_dir);
        fs::create_dir_all(&artifact_dir)?;

        let path = self.get_artifact_path(artifact);
        let result = if path.exists() {
            log::info!("Artifact file exists at {:?}, verifying...", path);
            if !self.verify_file(&path, &info.hash)? {
                log::warn!("Artifact file verification failed, redownloading");
                self.download_and_verify(&info, &path).await
            } else {
                log::info!("Existing artifact file verified successfully");
                Ok(())
            }
        } else {
            log::info!("Artifact file does not exist, downloading...");
            self.download_and_verify(&info, &path).await
        };

        match result {
            Ok(()) => {
                log::info!("Artifact ready to use");
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to setup artifact file: {}", e);
                // Cleanup on failure
                let _ = self.remove_download(artifact);
                Err(e)
            }
        }
    }

    fn verify_file(&self, path: &Path, expected_hash: &str) -> Result<bool, ManagerError> {
        let bytes = fs::read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("{:x}", hasher.finalize());
        log::info!("Calculated hash: {}", hash);
        log::info!("Expected hash:   {}", expected_hash);
        Ok(hash == expected_hash)
    }

    pub fn verify_artifact(&self, artifact: BuiltinArtifact) -> Result<bool, ManagerError> {
        let info = artifact.get_artifact_info();
        let path = self.get_artifact_path(artifact);

        if !path.exists() {
            log::info!("Artifact file {:?} does not exist", path);
            return Ok(false);
        }

        self.verify_file(&path, &info.hash)
    }

    async fn download_and_verify(
        &self,
        info: &ArtifactInfo,
        path: &Path,
    ) -> Result<(), ManagerError> {
        log::info!("Downloading artifact from {} to {:?}", info.url, path);
        let response = reqwest::get(&info.url).await?;
        log::info!("Download response status: {}", response.status());
        let bytes = response.bytes().await?;
        log::info!("Downloaded {} bytes", bytes.len());

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("{:x}", hasher.finalize());

        if hash != info.hash {
            log::error!(
                "Artifact hash mismatch: expected {}, got {}",
                info.hash,
                hash
            );
            return Err(ManagerError::HashMismatch {
                expected: info.hash.clone(),
                actual: hash,
            });
        }

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        log::info!("Writing {} bytes to {:?}", bytes.len(), path);
        fs::write(path, bytes)?;

        // Verify after writing
        if !self.verify_file(path, &info.hash)? {
            return Err(ManagerError::VerificationFailed);
        }

        log::info!("Artifact downloaded and verified successfully");
        Ok(())
    }

    pub fn remove_download(&self, artifact: BuiltinArtifact) -> Result<(), ManagerError> {
        let path = self.get_artifact_path(artifact);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Ensures that an artifact is downloaded and verified.
    /// If the artifact doesn't exist, it will be downloaded.
    /// If verification fails, it will be re-downloaded.
    pub async fn ensure_downloaded(&self, artifact: BuiltinArtifact) -> Result<(), ManagerError> {
        log::info!("Checking if artifact {:?} is downloaded...", artifact);
        if !self.is_downloaded(artifact) {
            log::info!("Artifact not found, downloading...");
            self.download_artifact(artifact).await?;
        } else {
            log::info!("Artifact exists, verifying...");
            if !self.verify_artifact(artifact)? {
                log::info!("Artifact verification failed, re-downloading...");
                self.remove_download(artifact)?;
                self.download_artifact(artifact).await?;
            } else {
                log::info!("Artifact verification successful");
            }
        }
        Ok(())
    }
}
