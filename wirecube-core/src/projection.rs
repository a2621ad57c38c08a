/// Viewport and orthographic screen projection
use nalgebra::{Point2, Point3};

use crate::config::DEFAULT_SCALE_DIVISOR;

/// Drawing surface size and the cube scale derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub cube_scale: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_divisor(width, height, DEFAULT_SCALE_DIVISOR)
    }

    /// Viewport whose cube scale is `min(width, height) / divisor`
    pub fn with_divisor(width: u32, height: u32, divisor: f64) -> Self {
        let width = width as f64;
        let height = height as f64;
        Self {
            width,
            height,
            cube_scale: width.min(height) / divisor,
        }
    }

    /// True when either side has no extent (e.g. a collapsed terminal)
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// Orthographic: z is dropped. The origin lands half a cube scale up and
    /// left of the viewport centre.
    pub fn project(&self, point: &Point3<f64>) -> Point2<f64> {
        project(point, self.width, self.height, self.cube_scale)
    }
}

/// Orthographic projection centred in a `width` x `height` surface
pub fn project(point: &Point3<f64>, width: f64, height: f64, scale: f64) -> Point2<f64> {
    Point2::new(
        width / 2.0 - scale / 2.0 + point.x * scale,
        height / 2.0 - scale / 2.0 + point.y * scale,
    )
}
