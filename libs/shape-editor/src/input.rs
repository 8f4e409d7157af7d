//! Pointer input as delivered by the host.

use glam::DVec2;

/// Which surface a pointer event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The drawing canvas.
    Canvas,
    /// A UI control (button) laid over the page. Never treated as a canvas click.
    Control,
}

/// Click or move event in client (page) pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: DVec2,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, target: PointerTarget) -> Self {
        Self {
            position: DVec2::new(x, y),
            target,
        }
    }

    pub fn canvas(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerTarget::Canvas)
    }

    pub fn control(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerTarget::Control)
    }

    pub fn is_on_control(&self) -> bool {
        self.target == PointerTarget::Control
    }
}
