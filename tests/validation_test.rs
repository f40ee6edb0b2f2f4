use limbic::{ArtifactError, Classifier, ModelArtifact, Vocabulary, Weighting};
use std::collections::HashMap;
use std::io::Write;

fn two_token_vocabulary() -> Vocabulary {
    Vocabulary::new(HashMap::from([
        ("furious".to_string(), 0),
        ("happy".to_string(), 1),
    ]))
    .unwrap()
}

#[test]
fn test_weight_row_count_must_match_labels() {
    let result = ModelArtifact::from_parts(
        vec![
            "anger".to_string(),
            "joy".to_string(),
            "neutral".to_string(),
        ],
        two_token_vocabulary(),
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        vec![0.0, 0.0, 0.0],
        Weighting::Count,
    );
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
}

#[test]
fn test_weight_row_length_must_match_vocabulary() {
    let result = ModelArtifact::from_parts(
        vec!["anger".to_string(), "joy".to_string()],
        two_token_vocabulary(),
        vec![vec![1.0, 2.0], vec![3.0]],
        vec![0.0, 0.0],
        Weighting::Count,
    );
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
}

#[test]
fn test_bias_length_must_match_labels() {
    let result = ModelArtifact::from_parts(
        vec!["anger".to_string(), "joy".to_string()],
        two_token_vocabulary(),
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        vec![0.0],
        Weighting::Count,
    );
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
}

#[test]
fn test_labels_must_not_be_empty() {
    let result = ModelArtifact::from_parts(
        vec![],
        two_token_vocabulary(),
        vec![],
        vec![],
        Weighting::Count,
    );
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
}

#[test]
fn test_labels_must_be_unique() {
    let result = ModelArtifact::from_parts(
        vec!["joy".to_string(), "joy".to_string()],
        two_token_vocabulary(),
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        vec![0.0, 0.0],
        Weighting::Count,
    );
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
}

#[test]
fn test_idf_length_must_match_vocabulary() {
    let result = ModelArtifact::from_parts(
        vec!["anger".to_string(), "joy".to_string()],
        two_token_vocabulary(),
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        vec![0.0, 0.0],
        Weighting::TfIdf { idf: vec![1.0] },
    );
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
}

#[test]
fn test_vocabulary_rejects_duplicate_indices() {
    let result = Vocabulary::new(HashMap::from([
        ("furious".to_string(), 0),
        ("happy".to_string(), 0),
    ]));
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
}

#[test]
fn test_vocabulary_rejects_out_of_range_index() {
    let result = Vocabulary::new(HashMap::from([
        ("furious".to_string(), 0),
        ("happy".to_string(), 5),
    ]));
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
}

#[test]
fn test_load_artifact_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{
        "labels": ["anger", "joy"],
        "vocabulary": {"furious": 0, "happy": 1},
        "weights": [[2.0, -1.0], [-1.0, 2.0]],
        "bias": [0.0, 0.0],
        "weighting": "count"
    }"#;

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;

    let classifier = Classifier::builder()
        .with_artifact_file(file.path())?
        .build()?;

    let info = classifier.info();
    assert_eq!(info.class_labels, vec!["anger", "joy"]);
    assert_eq!(info.vocabulary_size, 2);

    let prediction = classifier.predict("so happy")?;
    assert_eq!(prediction.label, "joy");
    Ok(())
}

#[test]
fn test_load_rejects_malformed_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"{ not json")?;

    let result = ModelArtifact::from_file(file.path());
    assert!(matches!(result, Err(ArtifactError::ParseError(_))));
    Ok(())
}

#[test]
fn test_load_rejects_missing_file() {
    let result = ModelArtifact::from_file("/nonexistent/artifact.json");
    assert!(matches!(result, Err(ArtifactError::NotFound(_))));
}

#[test]
fn test_load_rejects_inconsistent_file() -> Result<(), Box<dyn std::error::Error>> {
    // Three weight rows for two labels
    let json = r#"{
        "labels": ["anger", "joy"],
        "vocabulary": {"furious": 0, "happy": 1},
        "weights": [[2.0, -1.0], [-1.0, 2.0], [0.0, 0.0]],
        "bias": [0.0, 0.0]
    }"#;

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;

    let result = ModelArtifact::from_file(file.path());
    assert!(matches!(result, Err(ArtifactError::Inconsistent(_))));
    Ok(())
}
