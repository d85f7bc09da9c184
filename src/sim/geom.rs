//! Axis-aligned geometry for collision tests
//!
//! Positions are top-left corners in screen space (y grows downward).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D point/direction. `normalize()` requires a non-zero input.
pub type Vector2 = DVec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of `size` with its top-left corner at `origin`
    pub fn from_origin_size(origin: Vector2, size: Vector2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Overlap test with inclusive edges: touching boxes intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }
}
