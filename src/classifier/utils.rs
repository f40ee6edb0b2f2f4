use ndarray::Array1;

/// Applies the multinomial softmax transform to raw per-class scores.
///
/// The maximum score is subtracted before exponentiating. This does not
/// change the result but keeps `exp()` finite for large score magnitudes.
/// The transform is strictly monotonic, so the rank order of the input
/// scores is preserved in the output probabilities.
pub(crate) fn softmax(scores: &Array1<f32>) -> Array1<f32> {
    let max = scores.iter().fold(f32::NEG_INFINITY, |acc, &s| acc.max(s));
    let exponentials = scores.mapv(|s| (s - max).exp());
    let sum = exponentials.sum();
    exponentials / sum
}

/// Index of the maximal value; ties resolve to the lowest index.
pub(crate) fn top_index(values: &Array1<f32>) -> usize {
    let mut best = 0usize;
    for (index, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = index;
        }
    }
    best
}

pub(crate) fn normalize_vector(vec: &Array1<f32>) -> Array1<f32> {
    let norm: f32 = vec.iter().map(|&x| x * x).sum::<f32>().sqrt();
    if norm > 1e-10 {
        vec / norm
    } else {
        Array1::zeros(vec.len())
    }
}
