/// Pointer-driven rotation with inertial spin after release.
///
/// While the left button is held, the cube turns by the pointer's offset from
/// an anchor position that is only resampled every few frames. Releasing the
/// button hands over to a velocity that shrinks by a constant factor per frame.
use std::f64::consts::TAU;

use tracing::debug;

use crate::config::SceneConfig;
use crate::projection::Viewport;
use crate::transform::RotationStep;

/// Pointer position and button state sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub left_down: bool,
}

impl PointerSample {
    pub fn new(x: i32, y: i32, left_down: bool) -> Self {
        Self { x, y, left_down }
    }
}

/// Fires once every `period` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    period: u32,
    elapsed: u32,
}

impl Cadence {
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            elapsed: 0,
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Advance one tick; true when the period has just completed
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.period {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Drag/inertia state carried between frames
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Last resampled pointer position, unset until the first sample
    pub anchor: Option<(i32, i32)>,
    pub dragging: bool,
    pub velocity_x: f64,
    pub velocity_y: f64,
}

/// Turns pointer samples into per-frame rotation steps
#[derive(Debug, Clone)]
pub struct InertialController {
    state: PointerState,
    cadence: Cadence,
    divisor: i32,
    decay: f64,
}

impl InertialController {
    pub fn new(config: &SceneConfig) -> Self {
        let divisor = i32::try_from(config.cadence()).unwrap_or(i32::MAX);
        Self {
            state: PointerState::default(),
            // Anchor is resampled every `cadence + 1` frames.
            cadence: Cadence::new(config.cadence().saturating_add(1)),
            divisor,
            decay: config.decay(),
        }
    }

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.state.velocity_x, self.state.velocity_y)
    }

    /// Drop any drag or spin; the anchor is kept
    pub fn stop(&mut self) {
        self.state.velocity_x = 0.0;
        self.state.velocity_y = 0.0;
        self.state.dragging = false;
    }

    /// Consume one frame's pointer sample and return the rotation to apply
    pub fn update(&mut self, sample: PointerSample, viewport: &Viewport) -> RotationStep {
        // Nothing to divide by; hold all state until the surface has an area again.
        if viewport.is_degenerate() {
            return RotationStep::zero();
        }

        let (anchor_x, anchor_y) = *self.state.anchor.get_or_insert((sample.x, sample.y));

        if sample.left_down && !self.state.dragging {
            debug!(x = sample.x, y = sample.y, "drag started");
            self.state.dragging = true;
            self.state.velocity_x = 0.0;
            self.state.velocity_y = 0.0;
        } else if !sample.left_down && self.state.dragging {
            debug!(
                velocity_x = self.state.velocity_x,
                velocity_y = self.state.velocity_y,
                "drag released"
            );
            self.state.dragging = false;
        }

        let step = if self.state.dragging {
            let dx = sample.x - anchor_x;
            let dy = sample.y - anchor_y;

            // Integer division: deltas smaller than the cadence add nothing.
            self.state.velocity_x += (dx / self.divisor) as f64;
            self.state.velocity_y += (dy / self.divisor) as f64;

            RotationStep::new(
                (-dy as f64 * TAU) / viewport.height,
                (dx as f64 * TAU) / viewport.width,
            )
        } else {
            self.state.velocity_x *= self.decay;
            self.state.velocity_y *= self.decay;

            RotationStep::new(
                (self.state.velocity_y * TAU) / viewport.height,
                (self.state.velocity_x * TAU) / viewport.width,
            )
        };

        if self.cadence.tick() {
            self.state.anchor = Some((sample.x, sample.y));
        }

        step
    }
}

impl Default for InertialController {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}
