//! Axis-aligned rectangle geometry
//!
//! Screen-space convention throughout: origin at top-left, +Y down. A rect
//! is its top-left corner plus a size; everything else is a bounds query.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Grow the rect by `margin` on all four sides (Minkowski sum with a
    /// circle of that radius, approximated as an AABB)
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(2.0 * margin),
        }
    }

    /// Closest point on the rect (boundary or interior) to `p`, clamping
    /// each axis independently to the rect's span
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }

    /// Distance from `p` to each edge: (left, right, top, bottom).
    ///
    /// Used to pick a minimum-translation push-out axis when `p` is inside
    /// the rect and the usual separation vector degenerates to zero.
    pub fn overlap_depths(&self, p: Vec2) -> [f32; 4] {
        let min = self.min();
        let max = self.max();
        [p.x - min.x, max.x - p.x, p.y - min.y, max.y - p.y]
    }
}
