//! Session state
//!
//! Everything a running session owns: the level, the player, the camera,
//! the failure counter and the lifecycle phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::level::Level;
use super::player::Player;
use crate::consts::*;
use crate::tuning::Tuning;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start signal; no fixed steps run
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Goal reached; no fixed steps run until restart
    Won,
}

/// Why the player was sent back to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Fell below the death threshold
    Fell,
    /// Touched a hazard
    Hazard,
    /// Pressed the restart key mid-run
    Manual,
}

/// Notable things that happened, drained by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    Started,
    Died { cause: DeathCause, failures: u32 },
    Won { failures: u32 },
    Restarted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub level: Level,
    pub player: Player,
    pub camera: Camera,
    /// Deaths since the session (re)started
    pub failures: u32,
    /// Seconds left on the death flash overlay
    pub death_flash: f32,
    /// Fixed steps simulated while running
    pub time_ticks: u64,
    pub tuning: Tuning,
    /// Restart input was down on the previous step (edge detection)
    #[serde(default)]
    pub(crate) restart_held: bool,
    #[serde(skip)]
    events: Vec<SimEvent>,
}

impl GameState {
    /// A fresh session on the standard level
    pub fn new(tuning: Tuning) -> Self {
        Self::with_level(Level::build(), tuning)
    }

    /// A fresh session on a custom level, player at the standard spawn
    pub fn with_level(level: Level, tuning: Tuning) -> Self {
        let spawn = Vec2::new(SPAWN_X, level.ground_y() - tuning.player_height);
        Self::with_spawn(level, tuning, spawn)
    }

    pub fn with_spawn(level: Level, tuning: Tuning, spawn: Vec2) -> Self {
        let player = Player::new(spawn, Vec2::new(tuning.player_width, tuning.player_height));
        Self {
            phase: GamePhase::NotStarted,
            level,
            player,
            camera: Camera::default(),
            failures: 0,
            death_flash: 0.0,
            time_ticks: 0,
            tuning,
            restart_held: false,
            events: Vec::new(),
        }
    }

    /// Begin play. Ignored unless the session has not started yet.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            log::warn!("start() ignored in phase {:?}", self.phase);
            return false;
        }
        self.phase = GamePhase::Running;
        self.events.push(SimEvent::Started);
        log::info!("Session started");
        true
    }

    /// Reset the run: player to spawn, hazards to their initial patrol,
    /// failures to zero, camera to the level start. Ignored before start.
    pub fn restart(&mut self) -> bool {
        if self.phase == GamePhase::NotStarted {
            log::warn!("restart() ignored before start");
            return false;
        }
        self.player.reset();
        self.level.reset_hazards();
        self.failures = 0;
        self.death_flash = 0.0;
        self.camera = Camera::default();
        self.restart_held = false;
        self.phase = GamePhase::Running;
        self.events.push(SimEvent::Restarted);
        log::info!("Session restarted");
        true
    }

    /// Send the player back to spawn and count the failure
    pub fn fail(&mut self, cause: DeathCause) {
        self.player.reset();
        self.failures += 1;
        self.death_flash = DEATH_FLASH_SECS;
        self.events.push(SimEvent::Died {
            cause,
            failures: self.failures,
        });
        log::debug!("Player died ({:?}), failures={}", cause, self.failures);
    }

    pub fn win(&mut self) {
        self.phase = GamePhase::Won;
        self.events.push(SimEvent::Won {
            failures: self.failures,
        });
        log::info!(
            "Goal reached after {} ticks with {} failures",
            self.time_ticks,
            self.failures
        );
    }

    /// Per rendered frame (variable rate): camera follow and overlay timers
    pub fn frame_update(&mut self, frame_dt: f32) {
        self.camera
            .update(self.player.pos.x, self.level.width(), &self.tuning);
        if self.death_flash > 0.0 {
            self.death_flash = (self.death_flash - frame_dt).max(0.0);
        }
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain
    pub fn pending_events(&self) -> &[SimEvent] {
        &self.events
    }
}
