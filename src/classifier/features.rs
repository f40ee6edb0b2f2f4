use lazy_static::lazy_static;
use ndarray::Array1;
use regex::Regex;

use super::artifact::{Vocabulary, Weighting};
use super::utils::normalize_vector;

lazy_static! {
    // Token pattern the vocabulary was built with: runs of two or more word
    // characters, matched on the case-folded input.
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Splits text into the normalized word tokens used as feature keys.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&folded)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Turns raw text into the fixed-length feature vector the scorer expects.
///
/// Tokens outside the vocabulary are dropped silently. An empty input, or one
/// with no recognized tokens, yields the all-zero vector; that is valid and
/// flows through to scoring, where the bias vector alone decides the outcome.
/// Accumulation is by feature index over the token sequence, so the same text
/// always produces the same vector.
pub(crate) fn extract(text: &str, vocabulary: &Vocabulary, weighting: &Weighting) -> Array1<f32> {
    let mut features = Array1::zeros(vocabulary.len());
    let mut recognized = 0usize;
    for token in tokenize(text) {
        if let Some(index) = vocabulary.index_of(&token) {
            features[index] += 1.0;
            recognized += 1;
        }
    }

    match weighting {
        Weighting::Count => features,
        Weighting::TermFrequency => {
            if recognized > 0 {
                features / recognized as f32
            } else {
                features
            }
        }
        Weighting::TfIdf { idf } => {
            for (value, factor) in features.iter_mut().zip(idf) {
                *value *= *factor;
            }
            normalize_vector(&features)
        }
    }
}
