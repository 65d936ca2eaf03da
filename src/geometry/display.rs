use crate::foundation::core::{Point, Rect};

/// Maps pointer positions from display pixels into logical canvas space.
///
/// The canvas element may be scaled arbitrarily by layout; the logical resolution stays fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMapping {
    logical_width: f64,
    logical_height: f64,
    display: Rect,
}

impl DisplayMapping {
    /// Mapping for a canvas of `logical_width x logical_height` shown at `display` (client rect).
    pub fn new(logical_width: f64, logical_height: f64, display: Rect) -> Self {
        Self {
            logical_width,
            logical_height,
            display,
        }
    }

    /// Identity mapping: display size equals logical size at the origin.
    pub fn identity(size: f64) -> Self {
        Self::new(size, size, Rect::new(0.0, 0.0, size, size))
    }

    /// Update the on-screen rect after a layout change.
    pub fn set_display(&mut self, display: Rect) {
        self.display = display;
    }

    /// Horizontal and vertical logical-per-display ratios.
    ///
    /// A degenerate display rect maps 1:1 instead of dividing by zero.
    pub fn ratios(&self) -> (f64, f64) {
        let dw = self.display.width();
        let dh = self.display.height();
        let sx = if dw > 0.0 { self.logical_width / dw } else { 1.0 };
        let sy = if dh > 0.0 { self.logical_height / dh } else { 1.0 };
        (sx, sy)
    }

    /// Convert a client-space pointer position into logical canvas coordinates.
    pub fn to_canvas(&self, client: Point) -> Point {
        let (sx, sy) = self.ratios();
        Point::new(
            (client.x - self.display.x0) * sx,
            (client.y - self.display.y0) * sy,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/display.rs"]
mod tests;
