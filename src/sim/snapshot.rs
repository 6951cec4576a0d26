//! Read-only frame data for the presentation layer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Pit, Platform};
use super::player::Facing;
use super::rect::Rect;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub bounds: Rect,
    pub vel: Vec2,
    pub facing: Facing,
    pub on_ground: bool,
    pub walk_phase: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardView {
    pub bounds: Rect,
    /// Pulse animation phase
    pub phase: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalView {
    pub bounds: Rect,
    /// Vertical draw offset; the hitbox does not bob
    pub bob_offset: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub failures: u32,
    pub camera_x: f32,
    pub death_flash: f32,
    pub time_ticks: u64,
    pub level_width: f32,
    pub player: PlayerView,
    pub hazards: Vec<HazardView>,
    pub goal: GoalView,
    pub platforms: Vec<Platform>,
    pub pits: Vec<Pit>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        let goal = state.level.goal();
        Self {
            phase: state.phase,
            failures: state.failures,
            camera_x: state.camera.x,
            death_flash: state.death_flash,
            time_ticks: state.time_ticks,
            level_width: state.level.width(),
            player: PlayerView {
                bounds: player.bounds(),
                vel: player.vel,
                facing: player.facing,
                on_ground: player.on_ground,
                walk_phase: player.walk_phase,
            },
            hazards: state
                .level
                .hazards
                .iter()
                .map(|h| HazardView {
                    bounds: h.bounds(),
                    phase: h.phase,
                })
                .collect(),
            goal: GoalView {
                bounds: goal.bounds(),
                bob_offset: goal.bob_offset(),
            },
            platforms: state.level.platforms().to_vec(),
            pits: state.level.pits().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_standard_level() {
        let state = GameState::new(Tuning::default());
        let snap = FrameSnapshot::capture(&state);

        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert_eq!(snap.player.bounds, Rect::new(SPAWN_X, SPAWN_Y, PLAYER_WIDTH, PLAYER_HEIGHT));
        assert_eq!(snap.hazards.len(), 3);
        assert_eq!(snap.platforms.len(), state.level.platforms().len());
        assert_eq!(snap.pits.len(), 3);
        assert_eq!(snap.camera_x, 0.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let state = GameState::new(Tuning::default());
        let snap = FrameSnapshot::capture(&state);
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"phase\": \"NotStarted\""));

        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
