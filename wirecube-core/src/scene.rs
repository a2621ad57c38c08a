/// One cube, its controller, and the per-frame update
use crate::config::SceneConfig;
use crate::geometry::Wireframe;
use crate::inertia::{InertialController, PointerSample};
use crate::projection::Viewport;
use crate::render::{render_wireframe, LineSink};
use crate::transform::RotationStep;

/// Everything the frame loop advances each tick
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    wireframe: Wireframe,
    controller: InertialController,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            wireframe: Wireframe::cube(),
            controller: InertialController::new(&config),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn wireframe(&self) -> &Wireframe {
        &self.wireframe
    }

    pub fn controller(&self) -> &InertialController {
        &self.controller
    }

    /// Viewport for a `width` x `height` surface using the configured divisor
    pub fn viewport(&self, width: u32, height: u32) -> Viewport {
        Viewport::with_divisor(width, height, self.config.scale_divisor())
    }

    /// Rotate the cube for this frame's pointer sample
    pub fn update(&mut self, pointer: PointerSample, viewport: &Viewport) -> RotationStep {
        let step = self.controller.update(pointer, viewport);
        self.wireframe.rotate(&step);
        step
    }

    /// Draw the current orientation
    pub fn render<S: LineSink + ?Sized>(&self, viewport: &Viewport, sink: &mut S) {
        render_wireframe(&self.wireframe, viewport, sink);
    }

    /// Full frame: update then render into `sink`
    pub fn tick<S: LineSink + ?Sized>(
        &mut self,
        pointer: PointerSample,
        width: u32,
        height: u32,
        sink: &mut S,
    ) -> RotationStep {
        let viewport = self.viewport(width, height);
        let step = self.update(pointer, &viewport);
        self.render(&viewport, sink);
        step
    }

    /// Back to the canonical orientation with no spin
    pub fn reset(&mut self) {
        self.wireframe.reset();
        self.controller.stop();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}
