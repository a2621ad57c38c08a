/// wirecube core library - cube geometry, rotation and projection
///
/// This library holds the I/O-free part of the renderer: the wireframe path,
/// pointer-driven inertial rotation, orthographic projection and depth-shaded
/// edge emission. Hosts supply pointer samples and a line-drawing sink.

pub mod config;
pub mod geometry;
pub mod inertia;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use config::{ConfigError, SceneConfig};
pub use geometry::Wireframe;
pub use inertia::{Cadence, InertialController, PointerSample, PointerState};
pub use projection::Viewport;
pub use render::{LineSink, Rgb};
pub use scene::Scene;
pub use transform::{rotate_x, rotate_y, rotate_z, RotationStep};
