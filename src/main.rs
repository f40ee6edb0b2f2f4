use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use limbic::{ArtifactManager, BuiltinArtifact, Classifier};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to classify; runs the built-in demo inputs when omitted
    text: Option<String>,

    /// Load the model artifact from a local JSON file instead of the cache
    #[arg(short, long)]
    artifact: Option<PathBuf>,

    /// Force a fresh download of the artifact files
    #[arg(short, long)]
    fresh: bool,
}

async fn ensure_artifact_downloaded(fresh: bool) -> Result<()> {
    let manager = ArtifactManager::new_default()?;
    let artifact = BuiltinArtifact::Emotions;

    if fresh {
        info!("Fresh download requested - removing any existing artifact files...");
        manager.remove_download(artifact)?;
    }

    if !manager.is_downloaded(artifact) {
        info!("Downloading artifact...");
        manager.download_artifact(artifact).await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting Emotion Classifier Demo ===");

    let start_time = Instant::now();
    info!("Building classifier...");

    let classifier = match &args.artifact {
        Some(path) => Classifier::builder()
            .with_artifact_file(path)
            .with_context(|| format!("failed to load artifact from {}", path.display()))?
            .build()?,
        None => {
            // Ensure the builtin artifact is downloaded before proceeding
            ensure_artifact_downloaded(args.fresh).await?;
            Classifier::builder()
                .with_builtin(BuiltinArtifact::Emotions)?
                .build()?
        }
    };

    let build_time = start_time.elapsed();
    info!("=== Classifier Built Successfully (took {:.2?}) ===\n", build_time);

    let classifier_info = classifier.info();
    info!(
        "Classes ({}): {:?}",
        classifier_info.num_classes, classifier_info.class_labels
    );

    if let Some(text) = &args.text {
        process_input(&classifier, text)?;
        return Ok(());
    }

    let demo_inputs = vec![
        // Clear single-emotion cases
        "I am so thrilled about the concert tonight, best day ever",
        "This traffic jam is making me absolutely furious",
        "I can't stop crying after hearing the terrible news",
        "There is something moving in the dark and I am terrified",
        "Wow, I never expected them to announce that today",

        // Mixed-emotion cases
        "I'm happy for her promotion but sad she is moving away",
        "The surprise party was wonderful even though I was scared at first",

        // Edge cases
        "ok",
        "",
        "xylophones quizzically vaporize zebras",
    ];

    info!("=== Running Classifications ({} inputs) ===\n", demo_inputs.len());
    let classify_start = Instant::now();

    for (i, text) in demo_inputs.iter().enumerate() {
        info!(
            "\nTest {}/{} (elapsed: {:.2?}):",
            i + 1,
            demo_inputs.len(),
            classify_start.elapsed()
        );
        info!("Input: {}", text);
        process_input(&classifier, text)?;
    }

    let total_time = start_time.elapsed();
    let classify_time = classify_start.elapsed();

    info!("\n=== Demo Complete ===");
    info!("Total time: {:.2?}", total_time);
    info!("Build time: {:.2?}", build_time);
    info!("Classification time: {:.2?}", classify_time);
    info!(
        "Average time per classification: {:.2?}",
        classify_time / demo_inputs.len() as u32
    );

    Ok(())
}

fn process_input(classifier: &Classifier, text: &str) -> Result<()> {
    let prediction = classifier.predict(text)?;

    println!("\nResults:");
    println!("  Text: {}", prediction.text);
    println!("  Predicted emotion: {} {}", prediction.label, prediction.glyph);
    println!("  Confidence: {:.3}", prediction.confidence);
    println!("  Probabilities (sorted):");

    let mut distribution = prediction.distribution.clone();
    distribution.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for entry in distribution {
        println!("    {}: {:.1}%", entry.label, entry.probability * 100.0);
    }

    Ok(())
}
