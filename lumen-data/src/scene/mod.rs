//! Scene config parsing
//!
//! A scene is described by a JSON document holding a horizontal field of view
//! (`camera_angle_x`, radians) and an ordered list of frames, each with an image
//! path relative to the document and a row-major camera-to-world matrix.

mod config;
mod paths;

pub use config::{FrameRecord, Scene, SceneConfig, SceneFrame};
pub use paths::resolve_frame_path;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a scene config.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame {index} ({file_path}) has a non-finite transform_matrix")]
    NonFiniteTransform { index: usize, file_path: String },
}
