use std::fmt;

use super::artifact::ArtifactError;

/// Represents the different types of errors that can occur in the emotion classifier.
#[derive(Debug)]
pub enum ClassifierError {
    /// Error occurred while loading or validating the model artifact
    ArtifactError(String),
    /// Error occurred during the build phase
    BuildError(String),
    /// A feature vector's length does not match the weight matrix's column
    /// count. This indicates a programming defect and is never coerced.
    DimensionMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtifactError(msg) => write!(f, "Artifact error: {}", msg),
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimension mismatch: feature vector has length {}, weight matrix expects {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<ArtifactError> for ClassifierError {
    fn from(err: ArtifactError) -> Self {
        ClassifierError::ArtifactError(err.to_string())
    }
}
