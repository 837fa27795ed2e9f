//! Camera geometry
//!
//! Conventions: right-handed camera space looking down `-Z`, OpenGL clip space
//! (`z` in `[-1, 1]`), and a flipped clip-space `y` so that image rows grow
//! downward.

mod projection;
mod resolver;

pub use projection::{Projection, fovx_to_fovy, perspective};
pub use resolver::{FrameGeometry, resolve, resolve_with_projection};

use thiserror::Error;

/// Errors produced while building camera matrices.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("field of view {0} rad is outside (0, pi)")]
    FieldOfView(f32),

    #[error("aspect ratio {0} must be finite and positive")]
    Aspect(f32),

    #[error("clip planes must satisfy 0 < near < far, got near={near}, far={far}")]
    ClipPlanes { near: f32, far: f32 },

    #[error("camera transform is not invertible (determinant {determinant})")]
    SingularTransform { determinant: f32 },
}
