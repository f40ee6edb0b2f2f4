//! A thread-safe emotion classifier scoring short text against a pre-fitted
//! linear multi-class model.
//!
//! The pipeline converts raw text into a bag-of-words feature vector over the
//! artifact's vocabulary, scores it against the trained weight matrix and
//! bias, normalizes the scores into a probability distribution with a
//! numerically stable softmax, and reports the top label with its confidence,
//! the full distribution and a display glyph.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use limbic::{Classifier, ModelArtifact, Vocabulary, Weighting};
//! use std::collections::HashMap;
//!
//! let vocabulary = Vocabulary::new(HashMap::from([
//!     ("happy".to_string(), 0),
//!     ("furious".to_string(), 1),
//! ]))?;
//! let artifact = ModelArtifact::from_parts(
//!     vec!["anger".to_string(), "joy".to_string()],
//!     vocabulary,
//!     vec![vec![-1.0, 2.0], vec![2.0, -1.0]],
//!     vec![0.0, 0.0],
//!     Weighting::Count,
//! )?;
//!
//! let classifier = Classifier::builder()
//!     .with_artifact(artifact)?
//!     .build()?;
//!
//! let prediction = classifier.predict("This is a happy day!")?;
//! println!("{} {} ({:.1}%)", prediction.label, prediction.glyph, prediction.confidence * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! Production deployments load the artifact from a JSON file instead, either
//! directly with `with_artifact_file` or through the builtin registry and
//! [`ArtifactManager`] cache.
//!
//! # Thread Safety
//!
//! The classifier is read-only after construction and can be shared across
//! threads using `Arc`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # use limbic::{Classifier, ModelArtifact, Vocabulary, Weighting};
//! # use std::collections::HashMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! # let vocabulary = Vocabulary::new(HashMap::from([("happy".to_string(), 0)]))?;
//! # let artifact = ModelArtifact::from_parts(
//! #     vec!["joy".to_string(), "neutral".to_string()],
//! #     vocabulary,
//! #     vec![vec![1.0], vec![0.0]],
//! #     vec![0.0, 0.0],
//! #     Weighting::Count,
//! # )?;
//! let classifier = Arc::new(Classifier::builder().with_artifact(artifact)?.build()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     handles.push(thread::spawn(move || {
//!         classifier.predict("test text").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifact_manager;
pub mod classifier;
pub mod models;

pub use artifact_manager::{ArtifactManager, ManagerError};
pub use classifier::{
    ArtifactError, Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, GlyphTable,
    LabelProbability, ModelArtifact, Prediction, Vocabulary, Weighting,
};
pub use models::{ArtifactInfo, BuiltinArtifact};

pub fn init_logger() {
    env_logger::init();
}
