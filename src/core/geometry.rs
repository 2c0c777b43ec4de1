//! Axis-aligned rectangles in world units.

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Same rectangle with its origin truncated to whole pixels.
    pub fn snapped(&self) -> Rect {
        Rect::new(self.x.trunc(), self.y.trunc(), self.width, self.height)
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect,
    /// and empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0
        {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
