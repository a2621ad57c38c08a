/// Mouse state tracking for the frame loop
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use wirecube_core::PointerSample;

/// Latest pointer position (in canvas pixels) and left-button state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pointer {
    x: i32,
    y: i32,
    left_down: bool,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one mouse event into the pointer state.
    ///
    /// Rows map to the upper pixel of their cell, matching the canvas layout.
    pub fn handle(&mut self, event: &MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.left_down = true,
            MouseEventKind::Up(MouseButton::Left) => self.left_down = false,
            MouseEventKind::Down(_)
            | MouseEventKind::Up(_)
            | MouseEventKind::Drag(_)
            | MouseEventKind::Moved => {}
            _ => return,
        }
        self.x = i32::from(event.column);
        self.y = i32::from(event.row) * 2;
    }

    /// Forget a held button, e.g. after focus is lost
    pub fn release(&mut self) {
        self.left_down = false;
    }

    pub fn sample(&self) -> PointerSample {
        PointerSample::new(self.x, self.y, self.left_down)
    }
}
