//! Heart Dash - a single-level side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `tuning`: Data-driven physics constants
//!
//! Rendering, menus and particle effects live outside this crate and only
//! consume [`sim::FrameSnapshot`] values.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Longest frame the host may report; longer stalls are clamped
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Virtual viewport size (all world coordinates use this scale)
    pub const VIEWPORT_WIDTH: f32 = 960.0;
    pub const VIEWPORT_HEIGHT: f32 = 540.0;

    /// Level geometry
    pub const TILE: f32 = 32.0;
    pub const LEVEL_WIDTH: f32 = 4800.0;
    /// Top edge of the ground strip
    pub const GROUND_Y: f32 = VIEWPORT_HEIGHT - TILE * 2.0;
    /// Falling this far below the viewport bottom kills the player
    pub const DEATH_MARGIN: f32 = 60.0;

    /// Player physics (pixels, seconds)
    pub const GRAVITY: f32 = 1800.0;
    pub const PLAYER_SPEED: f32 = 280.0;
    /// Upward launch speed (negative = up)
    pub const JUMP_VELOCITY: f32 = -800.0;
    pub const COYOTE_TIME: f32 = 0.08;
    pub const JUMP_BUFFER: f32 = 0.1;
    pub const TERMINAL_FALL_SPEED: f32 = 900.0;
    /// Rising speed multiplier applied each step while jump is released
    pub const JUMP_CUT: f32 = 0.92;
    pub const PLAYER_WIDTH: f32 = 26.0;
    pub const PLAYER_HEIGHT: f32 = 36.0;

    /// Player spawn (top-left of the bounding box)
    pub const SPAWN_X: f32 = 80.0;
    pub const SPAWN_Y: f32 = GROUND_Y - PLAYER_HEIGHT;

    /// Camera follow
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    /// Player sits this fraction of the viewport from the left edge
    pub const CAMERA_LEAD: f32 = 1.0 / 3.0;

    /// Seconds the death flash stays visible
    pub const DEATH_FLASH_SECS: f32 = 0.6;
}
