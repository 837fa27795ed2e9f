//! Dataset-to-batch example
//!
//! Loads a scene, precomputes its frames and collates a training batch the way
//! a renderer's training loop would consume it.
//!
//! Usage:
//!   cargo run --example collate_batch -- <path_to_transforms.json> [batch_size]

use lumen_data::{FileImageLoader, Scene};
use lumen_train::{Dataset, NerfDataset, Sample, TrainConfig};
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let scene_path = args
        .next()
        .map(PathBuf::from)
        .ok_or("Please provide a transforms.json path")?;
    let batch_size: usize = match args.next() {
        Some(value) => value.parse()?,
        None => 8,
    };

    info!("Loading scene from: {:?}", scene_path);
    let scene = Scene::load(&scene_path)?;
    info!("{} frames have images on disk", scene.len());

    // Ask for more samples than frames so the batch replays the scene cyclically
    let config = TrainConfig {
        examples: Some(batch_size),
        ..Default::default()
    };
    let dataset = NerfDataset::from_scene(&scene, &config, &FileImageLoader)?;

    let batch = Sample::collate(dataset.iter()).ok_or("dataset produced no samples")?;
    info!(
        "Batch of {} samples, image tensor {:?}, spp {}",
        batch.batch_size(),
        batch.image_shape(),
        batch.spp
    );
    for (i, camera) in batch.camera_pos.iter().enumerate() {
        info!("  [{}] camera at {:?}", i, camera);
    }

    Ok(())
}
