use std::sync::Arc;

use ndarray::Array1;

use super::artifact::ModelArtifact;
use super::error::ClassifierError;
use super::features;
use super::glyphs::GlyphTable;
use super::prediction::Prediction;
use super::utils::{softmax, top_index};

/// A thread-safe emotion classifier scoring text against a pre-fitted linear
/// multi-class model.
///
/// # Thread Safety
///
/// This type is automatically `Send + Sync` because all of its fields are
/// thread-safe:
/// - `String` is `Send + Sync`
/// - `Arc<T>` provides thread-safe shared ownership
/// - `ModelArtifact` and `GlyphTable` are read-only after construction
///
/// Single-thread usage:
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use limbic::{Classifier, ModelArtifact, Vocabulary, Weighting};
/// use std::collections::HashMap;
///
/// let vocabulary = Vocabulary::new(HashMap::from([
///     ("happy".to_string(), 0),
///     ("furious".to_string(), 1),
/// ]))?;
/// let artifact = ModelArtifact::from_parts(
///     vec!["anger".to_string(), "joy".to_string()],
///     vocabulary,
///     vec![vec![-1.0, 2.0], vec![2.0, -1.0]],
///     vec![0.0, 0.0],
///     Weighting::Count,
/// )?;
///
/// let classifier = Classifier::builder()
///     .with_artifact(artifact)?
///     .build()?;
///
/// let prediction = classifier.predict("so happy today")?;
/// assert_eq!(prediction.label, "joy");
/// # Ok(())
/// # }
/// ```
///
/// Multi-thread usage:
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use limbic::{Classifier, ModelArtifact, Vocabulary, Weighting};
/// # use std::collections::HashMap;
/// use std::sync::Arc;
/// use std::thread;
///
/// # let vocabulary = Vocabulary::new(HashMap::from([("happy".to_string(), 0)]))?;
/// # let artifact = ModelArtifact::from_parts(
/// #     vec!["joy".to_string()],
/// #     vocabulary,
/// #     vec![vec![1.0]],
/// #     vec![0.0],
/// #     Weighting::Count,
/// # )?;
/// let classifier = Arc::new(Classifier::builder().with_artifact(artifact)?.build()?);
///
/// let classifier_clone = Arc::clone(&classifier);
/// thread::spawn(move || {
///     classifier_clone.predict("test text").unwrap();
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Classifier {
    pub(super) artifact: Arc<ModelArtifact>,
    pub(super) glyphs: Arc<GlyphTable>,
    pub(super) source: String,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            source: self.source.clone(),
            num_classes: self.artifact.num_classes(),
            class_labels: self.artifact.labels().to_vec(),
            vocabulary_size: self.artifact.vocab_size(),
            weighting: self.artifact.weighting().kind().to_string(),
        }
    }

    /// The loaded artifact backing this classifier.
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Classifies the input text and returns the predicted label with its
    /// confidence and the full per-label probability distribution.
    ///
    /// The input may be empty or contain no vocabulary tokens; such input
    /// flows through the pipeline with a zero feature vector and the bias
    /// terms alone decide the outcome. Ties at the maximal probability break
    /// to the label earliest in the artifact's canonical order.
    ///
    /// # Example
    /// ```rust
    /// # use limbic::{Classifier, ModelArtifact, Vocabulary, Weighting};
    /// # use std::collections::HashMap;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let vocabulary = Vocabulary::new(HashMap::from([("happy".to_string(), 0)]))?;
    /// # let artifact = ModelArtifact::from_parts(
    /// #     vec!["anger".to_string(), "joy".to_string()],
    /// #     vocabulary,
    /// #     vec![vec![-1.0], vec![2.0]],
    /// #     vec![0.0, 0.0],
    /// #     Weighting::Count,
    /// # )?;
    /// # let classifier = Classifier::builder().with_artifact(artifact)?.build()?;
    /// let prediction = classifier.predict("happy days ahead")?;
    /// println!("{} {} ({:.3})", prediction.label, prediction.glyph, prediction.confidence);
    /// for entry in &prediction.distribution {
    ///     println!("{}: {:.3}", entry.label, entry.probability);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn predict(&self, text: &str) -> Result<Prediction, ClassifierError> {
        let features = features::extract(
            text,
            self.artifact.vocabulary(),
            self.artifact.weighting(),
        );
        let scores = self.score(&features)?;
        let probabilities = softmax(&scores);
        let top = top_index(&probabilities);

        Ok(Prediction::assemble(
            text,
            top,
            &probabilities,
            self.artifact.labels(),
            &self.glyphs,
        ))
    }

    /// Computes one raw score per class: `weights[c] . features + bias[c]`.
    fn score(&self, features: &Array1<f32>) -> Result<Array1<f32>, ClassifierError> {
        let expected = self.artifact.vocab_size();
        if features.len() != expected {
            return Err(ClassifierError::DimensionMismatch {
                expected,
                actual: features.len(),
            });
        }
        Ok(self.artifact.weights().dot(features) + self.artifact.bias())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::artifact::{Vocabulary, Weighting};
    use ndarray::array;
    use std::collections::HashMap;

    fn test_classifier() -> Classifier {
        let vocabulary = Vocabulary::new(HashMap::from([
            ("furious".to_string(), 0),
            ("happy".to_string(), 1),
        ]))
        .unwrap();
        let artifact = ModelArtifact::from_parts(
            vec!["anger".to_string(), "joy".to_string()],
            vocabulary,
            vec![vec![2.0, -1.0], vec![-1.0, 2.0]],
            vec![0.0, 0.5],
            Weighting::Count,
        )
        .unwrap();
        Classifier::builder()
            .with_artifact(artifact)
            .unwrap()
            .build()
            .expect("Failed to create classifier")
    }

    #[test]
    fn test_score_linear_form() {
        let classifier = test_classifier();
        let scores = classifier.score(&array![1.0, 0.0]).unwrap();
        assert!((scores[0] - 2.0).abs() < 1e-6);
        assert!((scores[1] - (-0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_score_rejects_wrong_length() {
        let classifier = test_classifier();
        let result = classifier.score(&array![1.0, 0.0, 0.0]);
        assert!(matches!(
            result,
            Err(ClassifierError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_info_reports_artifact_shape() {
        let classifier = test_classifier();
        let info = classifier.info();
        assert_eq!(info.num_classes, 2);
        assert_eq!(info.vocabulary_size, 2);
        assert_eq!(info.class_labels, vec!["anger", "joy"]);
        assert_eq!(info.weighting, "count");
    }
}
