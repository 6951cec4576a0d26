//! Patrolling hazards
//!
//! A hazard slides back and forth along one axis between two bounds. The
//! motion is a closed oscillation: nothing random happens after spawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Axis, Rect};

/// Spawn parameters for a hazard. Levels keep these so hazards can be
/// rebuilt with fresh patrol state on restart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub pos: Vec2,
    pub size: Vec2,
    /// Lower patrol bound (the hazard's min edge never goes below it)
    pub min_bound: f32,
    /// Upper patrol bound (the hazard's max edge never goes past it)
    pub max_bound: f32,
    /// Patrol speed, pixels/s
    pub speed: f32,
    pub axis: Axis,
}

impl HazardSpec {
    pub const fn horizontal(x: f32, y: f32, size: f32, min_x: f32, max_x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(size, size),
            min_bound: min_x,
            max_bound: max_x,
            speed,
            axis: Axis::X,
        }
    }

    pub const fn vertical(x: f32, y: f32, size: f32, min_y: f32, max_y: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(size, size),
            min_bound: min_y,
            max_bound: max_y,
            speed,
            axis: Axis::Y,
        }
    }

    /// Extent of the hazard along its patrol axis
    #[inline]
    pub fn extent(&self) -> f32 {
        match self.axis {
            Axis::X => self.size.x,
            Axis::Y => self.size.y,
        }
    }

    /// Instantiate with initial patrol state (moving toward `max_bound`)
    pub fn spawn(&self) -> Hazard {
        Hazard {
            pos: self.pos,
            size: self.size,
            min_bound: self.min_bound,
            max_bound: self.max_bound,
            speed: self.speed,
            dir: 1.0,
            axis: self.axis,
            phase: 0.0,
        }
    }
}

/// A live hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: Vec2,
    pub min_bound: f32,
    pub max_bound: f32,
    pub speed: f32,
    /// +1 toward `max_bound`, -1 toward `min_bound`
    pub dir: f32,
    pub axis: Axis,
    /// Pulse animation phase (cosmetic)
    #[serde(default)]
    pub phase: f32,
}

impl Hazard {
    /// Advance the patrol by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let (coord, extent) = match self.axis {
            Axis::X => (&mut self.pos.x, self.size.x),
            Axis::Y => (&mut self.pos.y, self.size.y),
        };

        *coord += self.speed * self.dir * dt;
        if *coord <= self.min_bound {
            *coord = self.min_bound;
            self.dir = 1.0;
        }
        if *coord + extent >= self.max_bound {
            *coord = self.max_bound - extent;
            self.dir = -1.0;
        }

        self.phase += dt * 3.0;
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// True if `other` intersects this hazard
    #[inline]
    pub fn occupies(&self, other: &Rect) -> bool {
        self.bounds().overlaps(other)
    }

    /// Current position along the patrol axis
    #[inline]
    pub fn patrol_coord(&self) -> f32 {
        match self.axis {
            Axis::X => self.pos.x,
            Axis::Y => self.pos.y,
        }
    }
}
