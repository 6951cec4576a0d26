//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (level list order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod game;
pub mod goal;
pub mod hazard;
pub mod level;
pub mod player;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use camera::Camera;
pub use game::{FrameReport, Game, InputSource};
pub use goal::Goal;
pub use hazard::{Hazard, HazardSpec};
pub use level::{Level, Pit, Platform, PlatformKind};
pub use player::{Facing, Player};
pub use rect::{Axis, Rect, overlaps};
pub use snapshot::FrameSnapshot;
pub use state::{DeathCause, GamePhase, GameState, SimEvent};
pub use tick::{TickInput, tick};
