use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::info;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading or validating a model artifact.
///
/// All of these are fatal at startup: a process whose artifact fails to load
/// must not serve predictions.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact file not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Artifact parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Inconsistent artifact: {0}")]
    Inconsistent(String),
}

/// Immutable mapping from token to feature index, fixed when the artifact was
/// trained. Tokens unknown to the vocabulary contribute no feature signal at
/// inference time.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary from a token-to-index mapping.
    ///
    /// Every index must be unique and smaller than the vocabulary size, so
    /// that the indices cover exactly the columns of the weight matrix.
    pub fn new(index: HashMap<String, usize>) -> Result<Self, ArtifactError> {
        let size = index.len();
        let mut seen = vec![false; size];
        for (token, &position) in &index {
            if position >= size {
                return Err(ArtifactError::Inconsistent(format!(
                    "vocabulary index {} for token '{}' is out of range (vocabulary size is {})",
                    position, token, size
                )));
            }
            if seen[position] {
                return Err(ArtifactError::Inconsistent(format!(
                    "vocabulary index {} is assigned to more than one token",
                    position
                )));
            }
            seen[position] = true;
        }
        Ok(Self { index })
    }

    /// Feature index of a token, or `None` for tokens outside the vocabulary.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Number of tokens in the vocabulary (the feature-vector length V).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Term weighting scheme the artifact was trained with.
///
/// Feature extraction must apply the same scheme the training-time vectorizer
/// used; it is baked into the model's expected input distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Raw token counts
    Count,
    /// Counts divided by the total number of recognized tokens
    TermFrequency,
    /// Counts scaled by per-feature inverse document frequency, then
    /// L2-normalized
    TfIdf { idf: Vec<f32> },
}

impl Default for Weighting {
    fn default() -> Self {
        Weighting::Count
    }
}

impl Weighting {
    /// Short name of the scheme, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::TermFrequency => "term_frequency",
            Self::TfIdf { .. } => "tf_idf",
        }
    }
}

/// On-disk shape of an artifact file.
#[derive(Debug, Deserialize)]
struct RawArtifact {
    labels: Vec<String>,
    vocabulary: HashMap<String, usize>,
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
    #[serde(default)]
    weighting: Weighting,
}

/// The fitted parameters consumed by the inference pipeline: vocabulary,
/// weight matrix, bias vector, term weighting and the ordered class labels.
///
/// The label order in the artifact defines the canonical index-to-label
/// mapping used everywhere downstream, including tie-breaking. An artifact is
/// loaded once at startup and treated as read-only for the lifetime of the
/// process.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    labels: Vec<String>,
    vocabulary: Vocabulary,
    weights: Array2<f32>,
    bias: Array1<f32>,
    weighting: Weighting,
}

impl ModelArtifact {
    /// Assembles an artifact from its logical components, validating that
    /// the shapes are mutually consistent.
    ///
    /// # Errors
    /// Returns `ArtifactError::Inconsistent` if:
    /// - no labels are declared, or a label appears twice
    /// - the weight matrix row count differs from the label count
    /// - any weight row length differs from the vocabulary size
    /// - the bias length differs from the label count
    /// - a TF-IDF weighting carries an idf vector of the wrong length
    pub fn from_parts(
        labels: Vec<String>,
        vocabulary: Vocabulary,
        weights: Vec<Vec<f32>>,
        bias: Vec<f32>,
        weighting: Weighting,
    ) -> Result<Self, ArtifactError> {
        if labels.is_empty() {
            return Err(ArtifactError::Inconsistent(
                "artifact declares no class labels".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(ArtifactError::Inconsistent(format!(
                    "duplicate class label '{}'",
                    label
                )));
            }
        }

        let num_classes = labels.len();
        let vocab_size = vocabulary.len();

        if weights.len() != num_classes {
            return Err(ArtifactError::Inconsistent(format!(
                "weight matrix has {} rows but the artifact declares {} labels",
                weights.len(),
                num_classes
            )));
        }
        for (class, row) in weights.iter().enumerate() {
            if row.len() != vocab_size {
                return Err(ArtifactError::Inconsistent(format!(
                    "weight row {} has {} columns, expected the vocabulary size {}",
                    class,
                    row.len(),
                    vocab_size
                )));
            }
        }
        if bias.len() != num_classes {
            return Err(ArtifactError::Inconsistent(format!(
                "bias vector has length {} but the artifact declares {} labels",
                bias.len(),
                num_classes
            )));
        }
        if let Weighting::TfIdf { idf } = &weighting {
            if idf.len() != vocab_size {
                return Err(ArtifactError::Inconsistent(format!(
                    "idf vector has length {}, expected the vocabulary size {}",
                    idf.len(),
                    vocab_size
                )));
            }
        }

        let flat: Vec<f32> = weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((num_classes, vocab_size), flat)
            .map_err(|e| ArtifactError::Inconsistent(e.to_string()))?;

        Ok(Self {
            labels,
            vocabulary,
            weights,
            bias: Array1::from_vec(bias),
            weighting,
        })
    }

    /// Parses an artifact from its JSON representation.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_slice(bytes)?;
        let vocabulary = Vocabulary::new(raw.vocabulary)?;
        Self::from_parts(raw.labels, vocabulary, raw.weights, raw.bias, raw.weighting)
    }

    /// Loads and validates an artifact from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.display().to_string()));
        }
        let bytes = fs::read(path)?;
        let artifact = Self::from_slice(&bytes)?;
        info!(
            "Artifact loaded from {:?}: {} classes, vocabulary of {} tokens, {} weighting",
            path,
            artifact.num_classes(),
            artifact.vocab_size(),
            artifact.weighting.kind()
        );
        Ok(artifact)
    }

    /// Class labels in canonical artifact order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of classes C.
    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Feature-vector length V.
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Trained weight matrix of shape (C, V).
    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    /// Trained bias vector of length C.
    pub fn bias(&self) -> &Array1<f32> {
        &self.bias
    }

    pub fn weighting(&self) -> &Weighting {
        &self.weighting
    }
}
