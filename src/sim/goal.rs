//! The goal character at the end of the level

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Bob amplitude in pixels (cosmetic only)
pub const GOAL_BOB_AMPLITUDE: f32 = 2.0;

/// Stationary goal; touching it wins the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec2,
    pub size: Vec2,
    /// Bob animation phase, never affects the hitbox
    #[serde(default)]
    pub bob_phase: f32,
}

impl Goal {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            bob_phase: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.bob_phase += dt * 2.5;
    }

    /// Vertical draw offset for the bob animation
    #[inline]
    pub fn bob_offset(&self) -> f32 {
        self.bob_phase.sin() * GOAL_BOB_AMPLITUDE
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn occupies(&self, other: &Rect) -> bool {
        self.bounds().overlaps(other)
    }
}
