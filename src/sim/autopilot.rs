//! Demo autopilot
//!
//! Runs right and hops over whatever is ahead: gaps in the ground, walls
//! and hazards. Deterministic, so attract-mode runs replay identically.

use super::game::InputSource;
use super::rect::Rect;
use super::state::GameState;
use super::tick::TickInput;

/// How far ahead (pixels) the autopilot looks for gaps and walls
const LOOKAHEAD: f32 = 36.0;
/// Hazards closer than this trigger a jump
const HAZARD_RANGE: f32 = 90.0;
/// Steps to hold jump for a full-height hop
const HOLD_STEPS: u32 = 40;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    hold: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Should a grounded player jump now?
    fn obstacle_ahead(state: &GameState) -> bool {
        let body = state.player.bounds();
        let platforms = state.level.platforms();

        // Ground probe just past the leading edge, one pixel below the feet
        let floor_probe = Rect::new(body.right() + LOOKAHEAD, body.bottom(), 2.0, 2.0);
        let gap = !platforms.iter().any(|p| p.rect.overlaps(&floor_probe));

        let wall_probe = Rect::new(body.right(), body.y, LOOKAHEAD, body.h - 1.0);
        let wall = platforms.iter().any(|p| p.rect.overlaps(&wall_probe));

        let hazard = state.level.hazards.iter().any(|h| {
            let hb = h.bounds();
            let ahead = hb.right() > body.x && hb.x - body.right() < HAZARD_RANGE;
            let same_band = hb.y < body.bottom() && hb.bottom() > body.y;
            ahead && same_band
        });

        gap || wall || hazard
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, state: &GameState) -> TickInput {
        if state.player.on_ground && self.hold == 0 && Self::obstacle_ahead(state) {
            self.hold = HOLD_STEPS;
        }

        let jump = self.hold > 0;
        self.hold = self.hold.saturating_sub(1);

        TickInput {
            move_right: true,
            jump,
            ..Default::default()
        }
    }
}
