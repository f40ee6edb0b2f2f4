/// Represents the pre-fitted artifacts known to the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinArtifact {
    /// Eight-class emotion model (anger, disgust, fear, joy, surprise,
    /// neutral, sadness, shame)
    ///
    /// A linear multi-class model over a lower-cased bag-of-words
    /// vocabulary, fitted on short social-media texts.
    Emotions,
}

/// Download metadata for a builtin artifact
#[derive(Debug, Clone)]
pub struct ArtifactInfo {
    pub name: String,
    pub url: String,
    pub hash: String,
}

impl BuiltinArtifact {
    /// Get the download metadata for the artifact
    pub fn get_artifact_info(&self) -> ArtifactInfo {
        match self {
            Self::Emotions => ArtifactInfo {
                name: "emotions-lr".to_string(),
                url: "https://huggingface.co/axar-ai/emotions-lr/resolve/main/artifact.json"
                    .to_string(),
                hash: "9c4d1a6f0e8b2d7c5a3f9e1b8d6c4a2f0e9b7d5c3a1f8e6b4d2c0a9f7e5b3d1c"
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_artifact_info() {
        let info = BuiltinArtifact::Emotions.get_artifact_info();
        assert_eq!(info.name, "emotions-lr");
        assert!(info.url.contains("emotions-lr"));
        assert_eq!(info.hash.len(), 64);
    }
}
