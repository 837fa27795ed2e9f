//! Training parameters shared by every sample of a dataset

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or validating a [`TrainConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read training config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid training config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cam_near_far must satisfy 0 < near < far, got [{near}, {far}]")]
    ClipPlanes { near: f32, far: f32 },

    #[error("train_res must be non-zero, got {0:?}")]
    Resolution([u32; 2]),

    #[error("spp must be at least 1")]
    Spp,

    #[error("examples override must be at least 1")]
    Examples,
}

/// Rendering parameters passed to the dataset and echoed in every sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Near and far clip distances
    pub cam_near_far: [f32; 2],
    /// Training resolution as `[height, width]`
    pub train_res: [u32; 2],
    /// Samples per pixel
    pub spp: u32,
    /// Logical dataset length override
    pub examples: Option<usize>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            cam_near_far: [0.1, 1000.0],
            train_res: [512, 512],
            spp: 1,
            examples: None,
        }
    }
}

impl TrainConfig {
    /// Read a config from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TrainConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn near(&self) -> f32 {
        self.cam_near_far[0]
    }

    pub fn far(&self) -> f32 {
        self.cam_near_far[1]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [near, far] = self.cam_near_far;
        if !(near.is_finite() && far.is_finite() && near > 0.0 && near < far) {
            return Err(ConfigError::ClipPlanes { near, far });
        }
        if self.train_res.contains(&0) {
            return Err(ConfigError::Resolution(self.train_res));
        }
        if self.spp == 0 {
            return Err(ConfigError::Spp);
        }
        if self.examples == Some(0) {
            return Err(ConfigError::Examples);
        }
        Ok(())
    }
}
