//! Precomputed NeRF-style posed-image dataset

use crate::config::{ConfigError, TrainConfig};
use crate::dataset::{Dataset, DatasetError, Sample};
use crate::geometry::{FrameGeometry, Projection, resolve_with_projection};
use glam::{Mat4, Vec3};
use lumen_data::{FileImageLoader, FloatImage, ImageLoader, Scene, normalize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// A frame's image and camera geometry, computed once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFrame {
    path: PathBuf,
    image: Arc<FloatImage>,
    geometry: FrameGeometry,
}

impl ResolvedFrame {
    pub fn new(path: PathBuf, image: FloatImage, geometry: FrameGeometry) -> Self {
        Self {
            path,
            image: Arc::new(image),
            geometry,
        }
    }

    /// Image file this frame was decoded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &Arc<FloatImage> {
        &self.image
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    pub fn model_view(&self) -> Mat4 {
        self.geometry.model_view
    }

    pub fn mvp(&self) -> Mat4 {
        self.geometry.mvp
    }

    pub fn camera_pos(&self) -> Vec3 {
        self.geometry.camera_pos
    }
}

/// Dataset over a `transforms.json` scene.
///
/// Every surviving frame is decoded, linearized and resolved during
/// construction. Access wraps modulo the number of frames, so the logical
/// length (the `examples` override) may exceed or undercut it.
#[derive(Debug, Clone)]
pub struct NerfDataset {
    frames: Vec<ResolvedFrame>,
    projection: Projection,
    resolution: (usize, usize),
    train_res: [u32; 2],
    spp: u32,
    examples: Option<usize>,
}

impl NerfDataset {
    /// Load a scene config and precompute all frames from disk.
    pub fn load(config_path: impl AsRef<Path>, config: &TrainConfig) -> Result<Self, DatasetError> {
        Self::load_with(config_path, config, &FileImageLoader)
    }

    /// Like [`NerfDataset::load`] with a custom image loader.
    pub fn load_with<L: ImageLoader + ?Sized>(
        config_path: impl AsRef<Path>,
        config: &TrainConfig,
        loader: &L,
    ) -> Result<Self, DatasetError> {
        let scene = Scene::load(config_path)?;
        Self::from_scene(&scene, config, loader)
    }

    /// Precompute every frame of an already filtered scene.
    ///
    /// The aspect ratio comes from the first frame, and every other frame must
    /// share its shape: the same resolution and the same channel count.
    #[tracing::instrument(skip_all, fields(base_dir = %scene.base_dir.display()))]
    pub fn from_scene<L: ImageLoader + ?Sized>(
        scene: &Scene,
        config: &TrainConfig,
        loader: &L,
    ) -> Result<Self, DatasetError> {
        config.validate()?;
        if scene.is_empty() {
            return Err(DatasetError::NoFrames {
                base_dir: scene.base_dir.clone(),
            });
        }

        let mut frames = Vec::with_capacity(scene.len());
        let mut setup: Option<(Projection, Mat4, [usize; 3])> = None;

        for (index, frame) in scene.frames.iter().enumerate() {
            let raw = loader
                .load(&frame.path)
                .map_err(|source| DatasetError::Decode {
                    index,
                    path: frame.path.clone(),
                    source,
                })?;
            let image = normalize(raw);

            let shape = image.shape();
            let (_, matrix, expected) = match setup {
                Some(cached) => cached,
                None => {
                    let [height, width, channels] = shape;
                    let aspect = width as f32 / height as f32;
                    let projection =
                        Projection::new(scene.fov_x, aspect, config.near(), config.far())
                            .map_err(DatasetError::Projection)?;
                    info!(
                        "NeRF dataset: {} images with shape [{}, {}, {}]",
                        scene.len(),
                        height,
                        width,
                        channels
                    );
                    let cached = (projection, projection.matrix(), shape);
                    setup = Some(cached);
                    cached
                }
            };

            if shape != expected {
                return Err(DatasetError::ShapeMismatch {
                    index,
                    path: frame.path.clone(),
                    expected,
                    found: shape,
                });
            }

            let geometry = resolve_with_projection(frame.camera_to_world, matrix).map_err(
                |source| DatasetError::Geometry {
                    index,
                    path: frame.path.clone(),
                    source,
                },
            )?;
            debug!(
                "Resolved frame {} ({}), camera at {:?}",
                index,
                frame.path.display(),
                geometry.camera_pos
            );
            frames.push(ResolvedFrame::new(frame.path.clone(), image, geometry));
        }

        let Some((projection, _, [height, width, _])) = setup else {
            return Err(DatasetError::NoFrames {
                base_dir: scene.base_dir.clone(),
            });
        };

        Ok(Self {
            frames,
            projection,
            resolution: (height, width),
            train_res: config.train_res,
            spp: config.spp,
            examples: config.examples,
        })
    }

    /// Replace the logical length override. `Some(0)` is rejected like it is
    /// in [`TrainConfig::validate`].
    pub fn with_examples(mut self, examples: Option<usize>) -> Result<Self, ConfigError> {
        if examples == Some(0) {
            return Err(ConfigError::Examples);
        }
        self.examples = examples;
        Ok(self)
    }

    /// Number of cached frames, independent of the logical length.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Cached frame at `index`, wrapping modulo the frame count.
    pub fn frame(&self, index: usize) -> &ResolvedFrame {
        &self.frames[index % self.frames.len()]
    }

    pub fn frames(&self) -> &[ResolvedFrame] {
        &self.frames
    }

    /// Scene-wide projection parameters.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Image resolution `(height, width)` shared by all frames.
    pub fn resolution(&self) -> (usize, usize) {
        self.resolution
    }

    /// `width / height`
    pub fn aspect(&self) -> f32 {
        self.projection.aspect()
    }
}

impl Dataset for NerfDataset {
    type Item = Sample;

    fn len(&self) -> usize {
        self.examples.unwrap_or(self.frames.len())
    }

    fn get(&self, index: usize) -> Sample {
        Sample::from_frame(self.frame(index), self.train_res, self.spp)
    }
}
