//! Lumen CLI
//!
//! Loads a `transforms.json` scene into a precomputed dataset and logs what a
//! training loop would receive: dataset shape, projection, and a preview of
//! the first few samples.

use clap::Parser;
use lumen_train::{Dataset, NerfDataset, Sample, TrainConfig};
use std::error::Error;
use std::path::PathBuf;
use tracing::{error, info};

/// Lumen - posed-image dataset preparation
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene config (transforms.json)
    scene: PathBuf,

    /// Training config JSON (cam_near_far, train_res, spp, examples)
    #[arg(short, long)]
    train_config: Option<PathBuf>,

    /// Near clip distance
    #[arg(long)]
    near: Option<f32>,

    /// Far clip distance
    #[arg(long)]
    far: Option<f32>,

    /// Samples per pixel
    #[arg(long)]
    spp: Option<u32>,

    /// Training resolution
    #[arg(long, num_args = 2, value_names = ["HEIGHT", "WIDTH"])]
    train_res: Option<Vec<u32>>,

    /// Logical dataset length override
    #[arg(short, long)]
    examples: Option<usize>,

    /// Number of samples to preview
    #[arg(short, long, default_value_t = 4)]
    preview: usize,
}

impl Args {
    fn train_config(&self) -> Result<TrainConfig, Box<dyn Error>> {
        let mut config = match &self.train_config {
            Some(path) => TrainConfig::from_json_file(path)?,
            None => TrainConfig::default(),
        };
        if let Some(near) = self.near {
            config.cam_near_far[0] = near;
        }
        if let Some(far) = self.far {
            config.cam_near_far[1] = far;
        }
        if let Some(spp) = self.spp {
            config.spp = spp;
        }
        // clap enforces exactly two values
        if let Some(res) = &self.train_res {
            config.train_res = [res[0], res[1]];
        }
        if self.examples.is_some() {
            config.examples = self.examples;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.train_config()?;
    info!("Loading scene from: {:?}", args.scene);

    let dataset = NerfDataset::load(&args.scene, &config)?;
    let projection = dataset.projection();
    let (height, width) = dataset.resolution();
    info!(
        "{} frames ({} logical samples) at {}x{}, aspect {:.3}",
        dataset.frame_count(),
        dataset.len(),
        width,
        height,
        dataset.aspect()
    );
    info!(
        "fov x {:.4} rad, fov y {:.4} rad, near {}, far {}",
        projection.fov_x(),
        projection.fov_y(),
        projection.near(),
        projection.far()
    );

    for (index, sample) in dataset.iter().take(args.preview).enumerate() {
        log_sample(index, &sample);
    }

    if let Some(batch) = Sample::collate(dataset.iter().take(args.preview)) {
        info!(
            "Collated preview batch: images {:?}, resolution {:?}, spp {}",
            batch.image_shape(),
            batch.resolution,
            batch.spp
        );
    }

    Ok(())
}

fn log_sample(index: usize, sample: &Sample) {
    let image = sample.image.first();
    let samples = image.as_raw();
    let mean = samples.iter().sum::<f32>() / samples.len().max(1) as f32;
    let max = samples.iter().copied().fold(f32::MIN, f32::max);
    let camera = sample.camera_pos.first();
    let origin = sample.mvp.first().project_point3(glam::Vec3::ZERO);

    info!(
        "sample {}: camera at ({:.3}, {:.3}, {:.3}), origin in NDC ({:.3}, {:.3}), image mean {:.4} max {:.4}",
        index, camera.x, camera.y, camera.z, origin.x, origin.y, mean, max
    );
}
