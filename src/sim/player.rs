//! Player controller and collision response
//!
//! One fixed step runs, in order: horizontal intent, jump buffer, coyote
//! timer, jump, jump cut, gravity, X move + resolve, Y move + resolve,
//! world clamp. X and Y are resolved separately so diagonal motion never
//! catches on platform corners.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Level, Platform};
use super::rect::{Axis, Rect};
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    /// Seconds a late jump is still honored after leaving ground
    pub coyote_timer: f32,
    /// Seconds an early jump press is remembered before landing
    pub jump_buffer: f32,
    pub facing: Facing,
    pub spawn: Vec2,
    /// Walk cycle phase (cosmetic)
    #[serde(default)]
    pub walk_phase: f32,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
            coyote_timer: 0.0,
            jump_buffer: 0.0,
            facing: Facing::Right,
            spawn,
            walk_phase: 0.0,
        }
    }

    /// Back to spawn with all transient state cleared
    pub fn reset(&mut self) {
        *self = Self::new(self.spawn, self.size);
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Advance one fixed step
    pub fn update(&mut self, input: &TickInput, level: &Level, tuning: &Tuning, dt: f32) {
        // Horizontal intent (instantaneous, no acceleration)
        let move_dir = input.move_dir();
        self.vel.x = move_dir * tuning.player_speed;
        if move_dir != 0.0 {
            self.facing = if move_dir > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
            if self.on_ground {
                self.walk_phase += dt * 12.0;
            }
        }

        if input.jump {
            self.jump_buffer = tuning.jump_buffer;
        } else {
            self.jump_buffer = (self.jump_buffer - dt).max(0.0);
        }

        if self.on_ground {
            self.coyote_timer = tuning.coyote_time;
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }

        if self.jump_buffer > 0.0 && self.coyote_timer > 0.0 {
            self.vel.y = tuning.jump_velocity;
            self.jump_buffer = 0.0;
            self.coyote_timer = 0.0;
            self.on_ground = false;
        }

        // Releasing jump early cuts the rise short
        if !input.jump && self.vel.y < 0.0 {
            self.vel.y *= tuning.jump_cut;
        }

        self.vel.y = (self.vel.y + tuning.gravity * dt).min(tuning.terminal_fall_speed);

        self.pos.x += self.vel.x * dt;
        self.resolve_axis(level.platforms(), Axis::X);

        self.pos.y += self.vel.y * dt;
        self.on_ground = false;
        self.resolve_axis(level.platforms(), Axis::Y);

        // No vertical clamp: falling out of the world is handled by the session
        self.pos.x = self.pos.x.clamp(0.0, (level.width() - self.size.x).max(0.0));
    }

    /// Push the player out of every platform it overlaps along `axis`.
    ///
    /// Contacts resolve shallowest first (ties by platform order). Each is
    /// re-tested before resolving, so a platform already cleared by an
    /// earlier push is left alone.
    pub fn resolve_axis(&mut self, platforms: &[Platform], axis: Axis) {
        let motion = match axis {
            Axis::X => self.vel.x,
            Axis::Y => self.vel.y,
        };

        let bounds = self.bounds();
        let current = match axis {
            Axis::X => bounds.x,
            Axis::Y => bounds.y,
        };
        let mut contacts: Vec<(f32, usize)> = platforms
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                bounds
                    .resolve_along(&p.rect, axis, motion)
                    .map(|target| ((target - current).abs(), i))
            })
            .collect();
        if contacts.is_empty() {
            return;
        }
        contacts.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        for (_, i) in contacts {
            let Some(target) = self.bounds().resolve_along(&platforms[i].rect, axis, motion) else {
                continue;
            };
            match axis {
                Axis::X => {
                    self.pos.x = target;
                    self.vel.x = 0.0;
                }
                Axis::Y => {
                    // Snapped onto a top surface
                    if target <= self.pos.y {
                        self.on_ground = true;
                    }
                    self.pos.y = target;
                    self.vel.y = 0.0;
                }
            }
        }
    }
}
