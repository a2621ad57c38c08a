/// Depth-shaded edge rendering
use nalgebra::Point2;

use crate::geometry::Wireframe;
use crate::projection::Viewport;

/// 24-bit line colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::gray(0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

/// Anything that can draw a straight line between two screen points
pub trait LineSink {
    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb);
}

/// Gray level for an edge whose endpoints sit at depths `z0` and `z1`.
///
/// Centred on 125 for z = 0; saturates at 0 and 255 instead of wrapping.
pub fn shade(z0: f64, z1: f64) -> u8 {
    let level = 125.0 + 125.0 * (z0 + z1) / 4.0;
    if level.is_nan() {
        return 0;
    }
    level.clamp(0.0, 255.0) as u8
}

/// Project the wireframe and emit one draw call per edge, in path order
pub fn render_wireframe<S: LineSink + ?Sized>(
    wireframe: &Wireframe,
    viewport: &Viewport,
    sink: &mut S,
) {
    for (from, to) in wireframe.segments() {
        let color = Rgb::gray(shade(from.z, to.z));
        sink.draw_line(viewport.project(from), viewport.project(to), color);
    }
}
