use crate::geometry::GeometryError;
use glam::Mat4;
use std::f32::consts::PI;

/// Convert a horizontal field of view to a vertical one for an aspect ratio
/// of `width / height`.
pub fn fovx_to_fovy(fov_x: f32, aspect: f32) -> f32 {
    ((fov_x * 0.5).tan() / aspect).atan() * 2.0
}

/// Right-handed OpenGL-style perspective matrix with clip-space `y` flipped.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let mut m = Mat4::perspective_rh_gl(fov_y, aspect, near, far);
    m.y_axis.y = -m.y_axis.y;
    m
}

/// Scene-wide projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov_x: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// Validate and store projection parameters.
    ///
    /// `fov_x` is the horizontal field of view in radians and must lie in
    /// `(0, pi)`. `aspect` is `width / height`.
    pub fn new(fov_x: f32, aspect: f32, near: f32, far: f32) -> Result<Self, GeometryError> {
        if !(fov_x > 0.0 && fov_x < PI) {
            return Err(GeometryError::FieldOfView(fov_x));
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(GeometryError::Aspect(aspect));
        }
        if !(near.is_finite() && far.is_finite() && near > 0.0 && near < far) {
            return Err(GeometryError::ClipPlanes { near, far });
        }
        Ok(Self {
            fov_x,
            aspect,
            near,
            far,
        })
    }

    pub fn fov_x(&self) -> f32 {
        self.fov_x
    }

    /// Vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        fovx_to_fovy(self.fov_x, self.aspect)
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Camera-to-clip matrix.
    pub fn matrix(&self) -> Mat4 {
        perspective(self.fov_y(), self.aspect, self.near, self.far)
    }
}
