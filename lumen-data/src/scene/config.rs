//! Scene config structures and loading

use crate::scene::{SceneError, resolve_frame_path};
use glam::Mat4;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One frame entry of a scene config, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Image path relative to the config's directory
    pub file_path: String,
    /// Row-major 4x4 camera-to-world transform
    pub transform_matrix: [[f32; 4]; 4],
}

impl FrameRecord {
    /// The stored transform as a glam matrix (glam is column-major).
    pub fn camera_to_world(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.transform_matrix).transpose()
    }
}

/// A scene config document (`transforms.json`).
///
/// Unknown keys (`rotation`, per-frame metadata, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Horizontal field of view in radians
    pub camera_angle_x: f32,
    pub frames: Vec<FrameRecord>,
}

impl SceneConfig {
    /// Parse a scene config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.check_transforms()?;
        Ok(config)
    }

    /// Read and parse a scene config file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!("Parsed scene config with {} frames", config.frames.len());
        Ok(config)
    }

    fn check_transforms(&self) -> Result<(), SceneError> {
        for (index, frame) in self.frames.iter().enumerate() {
            if !frame.camera_to_world().is_finite() {
                return Err(SceneError::NonFiniteTransform {
                    index,
                    file_path: frame.file_path.clone(),
                });
            }
        }
        Ok(())
    }

    /// Drop frames whose image does not exist under `base_dir`.
    ///
    /// Surviving frames keep their relative order and are re-indexed densely.
    pub fn retain_existing(self, base_dir: &Path) -> Scene {
        let total = self.frames.len();
        let frames: Vec<SceneFrame> = self
            .frames
            .into_iter()
            .filter_map(|record| match resolve_frame_path(base_dir, &record.file_path) {
                Some(path) => Some(SceneFrame {
                    path,
                    camera_to_world: record.camera_to_world(),
                }),
                None => {
                    warn!("Skipping frame with missing image: {}", record.file_path);
                    None
                }
            })
            .collect();

        if frames.len() < total {
            info!(
                "Kept {} of {} frames ({} missing images)",
                frames.len(),
                total,
                total - frames.len()
            );
        }

        Scene {
            base_dir: base_dir.to_path_buf(),
            fov_x: self.camera_angle_x,
            frames,
        }
    }
}

/// A frame whose image is known to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    /// Resolved image path
    pub path: PathBuf,
    /// Camera-to-world transform
    pub camera_to_world: Mat4,
}

/// A scene config after missing-file filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Directory the frame paths were resolved against
    pub base_dir: PathBuf,
    /// Horizontal field of view in radians
    pub fov_x: f32,
    pub frames: Vec<SceneFrame>,
}

impl Scene {
    /// Load a scene config file and filter out frames with missing images.
    ///
    /// Frame paths are resolved relative to the config file's directory.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let config_path = config_path.as_ref();
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let config = SceneConfig::from_json_file(config_path)?;
        Ok(config.retain_existing(&base_dir))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
