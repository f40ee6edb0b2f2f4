use std::path::Path;
use std::sync::Arc;

use log::{error, info};

use super::artifact::ModelArtifact;
use super::error::ClassifierError;
use super::glyphs::GlyphTable;
use super::model::Classifier;
use crate::{ArtifactManager, BuiltinArtifact};

/// A builder for constructing a Classifier with a fluent interface.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    artifact: Option<ModelArtifact>,
    source: Option<String>,
    glyphs: Option<GlyphTable>,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance
    ///
    /// # Example
    /// ```
    /// use limbic::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            artifact: None,
            source: None,
            glyphs: None,
        }
    }

    /// Sets the model artifact from the builtin registry.
    ///
    /// The artifact must already be present in the local cache; download it
    /// first with [`ArtifactManager::download_artifact`].
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - An artifact is already set
    ///   - The artifact is not downloaded
    ///   - The artifact file failed to load or is structurally inconsistent
    pub fn with_builtin(self, builtin: BuiltinArtifact) -> Result<Self, ClassifierError> {
        let manager = ArtifactManager::new_default().map_err(|e| {
            ClassifierError::BuildError(format!("Failed to create artifact manager: {}", e))
        })?;

        if !manager.is_downloaded(builtin) {
            return Err(ClassifierError::BuildError(format!(
                "Artifact '{:?}' is not downloaded. Please download it first using ArtifactManager::download_artifact()",
                builtin
            )));
        }

        self.with_artifact_file(manager.get_artifact_path(builtin))
    }

    /// Sets the model artifact from a JSON file on disk.
    ///
    /// # Arguments
    /// * `path` - Path to the artifact file
    ///
    /// # Example
    /// ```no_run
    /// use limbic::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_artifact_file("models/emotions.json");
    /// ```
    pub fn with_artifact_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        if self.artifact.is_some() {
            return Err(ClassifierError::BuildError(
                "Model artifact already set".to_string(),
            ));
        }

        let artifact = ModelArtifact::from_file(path).map_err(|e| {
            error!("Failed to load artifact: {}", e);
            ClassifierError::ArtifactError(e.to_string())
        })?;

        self.source = Some(path.display().to_string());
        self.artifact = Some(artifact);
        Ok(self)
    }

    /// Sets an already-loaded model artifact.
    ///
    /// Useful when the artifact comes from somewhere other than the local
    /// filesystem, or is assembled in memory (e.g. in tests).
    pub fn with_artifact(mut self, artifact: ModelArtifact) -> Result<Self, ClassifierError> {
        if self.artifact.is_some() {
            return Err(ClassifierError::BuildError(
                "Model artifact already set".to_string(),
            ));
        }
        self.source = Some("in-memory".to_string());
        self.artifact = Some(artifact);
        Ok(self)
    }

    /// Replaces the default emoji glyph table used for presentation.
    pub fn with_glyphs(mut self, glyphs: GlyphTable) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The constructed Classifier if successful, or an error if:
    ///   - No artifact has been set
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        let artifact = self
            .artifact
            .ok_or_else(|| ClassifierError::BuildError("No model artifact set".to_string()))?;

        info!(
            "Classifier ready: {} classes over a vocabulary of {} tokens",
            artifact.num_classes(),
            artifact.vocab_size()
        );

        Ok(Classifier {
            artifact: Arc::new(artifact),
            glyphs: Arc::new(self.glyphs.unwrap_or_default()),
            source: self.source.unwrap_or_else(|| "in-memory".to_string()),
        })
    }
}
