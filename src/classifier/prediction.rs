use ndarray::Array1;
use serde::Serialize;

use super::glyphs::GlyphTable;

/// One entry of the per-label probability distribution.
#[derive(Debug, Clone, Serialize)]
pub struct LabelProbability {
    pub label: String,
    pub probability: f32,
}

/// Fully assembled classification outcome for one input text.
///
/// `distribution` lists every class exactly once, in the artifact's canonical
/// label order, and its probabilities sum to 1 within floating-point
/// tolerance. `confidence` is the probability assigned to `label`, which is
/// the maximal entry of the distribution.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// The raw input text the prediction was made for
    pub text: String,
    /// The predicted class label
    pub label: String,
    /// Probability of the predicted label
    pub confidence: f32,
    /// Full per-label distribution in canonical artifact order
    pub distribution: Vec<LabelProbability>,
    /// Display glyph resolved for the predicted label
    pub glyph: String,
}

impl Prediction {
    /// Assembles the final result from the computed distribution. Purely
    /// presentational: no numeric transformation happens here.
    pub(crate) fn assemble(
        text: &str,
        top: usize,
        probabilities: &Array1<f32>,
        labels: &[String],
        glyphs: &GlyphTable,
    ) -> Self {
        let distribution = labels
            .iter()
            .zip(probabilities.iter())
            .map(|(label, &probability)| LabelProbability {
                label: label.clone(),
                probability,
            })
            .collect();

        let label = labels[top].clone();
        Self {
            text: text.to_string(),
            confidence: probabilities[top],
            glyph: glyphs.glyph(&label).to_string(),
            label,
            distribution,
        }
    }

    /// Probability assigned to a label, or `None` for labels the artifact
    /// does not declare.
    pub fn probability(&self, label: &str) -> Option<f32> {
        self.distribution
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_assemble_preserves_canonical_order() {
        let labels = vec![
            "anger".to_string(),
            "joy".to_string(),
            "neutral".to_string(),
        ];
        let probabilities = array![0.2, 0.7, 0.1];
        let prediction =
            Prediction::assemble("great", 1, &probabilities, &labels, &GlyphTable::default());

        assert_eq!(prediction.label, "joy");
        assert_eq!(prediction.confidence, 0.7);
        assert_eq!(prediction.glyph, "\u{1F638}");
        let order: Vec<&str> = prediction
            .distribution
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(order, vec!["anger", "joy", "neutral"]);
        assert_eq!(prediction.probability("anger"), Some(0.2));
        assert_eq!(prediction.probability("boredom"), None);
    }
}
