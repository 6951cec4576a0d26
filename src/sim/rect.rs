//! Axis-aligned rectangle geometry
//!
//! Every shape in the level (platforms, hazards, player, goal) is a `Rect`
//! in world coordinates: x grows right, y grows down, (x, y) is the
//! top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Collision axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from a top-left position and a size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Both dimensions strictly positive
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// Half-open overlap test: touching edges do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }

    /// Where `self` must sit along `axis` to clear `other`.
    ///
    /// `motion` is the signed velocity along that axis. Positive motion
    /// snaps back against the min edge of `other`, negative against its max
    /// edge; with no motion the shallower side wins. Returns the new min
    /// coordinate (`x` or `y`), or `None` if the boxes do not overlap.
    pub fn resolve_along(&self, other: &Rect, axis: Axis, motion: f32) -> Option<f32> {
        if !self.overlaps(other) {
            return None;
        }

        let (lo, extent, other_lo, other_hi) = match axis {
            Axis::X => (self.x, self.w, other.x, other.right()),
            Axis::Y => (self.y, self.h, other.y, other.bottom()),
        };

        let before = other_lo - extent;
        let after = other_hi;

        Some(if motion > 0.0 {
            before
        } else if motion < 0.0 {
            after
        } else if lo - before <= after - lo {
            before
        } else {
            after
        })
    }
}

/// Half-open AABB intersection on both axes
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
