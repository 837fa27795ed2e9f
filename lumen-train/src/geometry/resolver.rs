//! Per-frame camera geometry

use crate::geometry::{GeometryError, Projection};
use glam::{Mat4, Vec3};

/// Determinants at or below this magnitude are treated as singular.
const SINGULAR_DETERMINANT: f32 = 1e-12;

/// Camera matrices derived from one frame's pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    /// World-to-camera
    pub model_view: Mat4,
    /// Camera-to-clip
    pub projection: Mat4,
    /// World-to-clip, `projection * model_view`
    pub mvp: Mat4,
    /// Camera center in world space
    pub camera_pos: Vec3,
}

/// Derive the full matrix set for a camera-to-world pose.
///
/// `fov_x` is the horizontal field of view in radians, `aspect` is
/// `width / height`.
pub fn resolve(
    camera_to_world: Mat4,
    fov_x: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> Result<FrameGeometry, GeometryError> {
    let projection = Projection::new(fov_x, aspect, near, far)?;
    resolve_with_projection(camera_to_world, projection.matrix())
}

/// Same as [`resolve`] with a precomputed projection matrix.
pub fn resolve_with_projection(
    camera_to_world: Mat4,
    projection: Mat4,
) -> Result<FrameGeometry, GeometryError> {
    let determinant = camera_to_world.determinant();
    if !determinant.is_finite() || determinant.abs() <= SINGULAR_DETERMINANT {
        return Err(GeometryError::SingularTransform { determinant });
    }
    let model_view = camera_to_world.inverse();
    if !model_view.is_finite() {
        return Err(GeometryError::SingularTransform { determinant });
    }

    Ok(FrameGeometry {
        model_view,
        projection,
        mvp: projection * model_view,
        camera_pos: camera_to_world.w_axis.truncate(),
    })
}
