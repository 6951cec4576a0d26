//! Frame-driven simulation loop
//!
//! The host calls [`Game::frame`] once per displayed frame with the real
//! time since the previous one. The frame time is clamped, accumulated and
//! drained in fixed steps; the remainder carries to the next frame. Camera
//! and overlay timers update once per frame regardless of step count.

use super::snapshot::FrameSnapshot;
use super::state::{GamePhase, GameState, SimEvent};
use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

/// Supplies input for each fixed step
pub trait InputSource {
    fn sample(&mut self, state: &GameState) -> TickInput;
}

/// A held snapshot: the same input for every step
impl InputSource for TickInput {
    fn sample(&mut self, _state: &GameState) -> TickInput {
        *self
    }
}

impl<F> InputSource for F
where
    F: FnMut(&GameState) -> TickInput,
{
    fn sample(&mut self, state: &GameState) -> TickInput {
        self(state)
    }
}

/// What one host frame did
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Fixed steps run this frame
    pub steps: u32,
    /// Events raised this frame, oldest first
    pub events: Vec<SimEvent>,
}

/// Session plus the fixed-step accumulator
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    accumulator: f32,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        Self::from_state(GameState::new(tuning))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
        }
    }

    /// Read-only view of the session
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Start signal from the host UI
    pub fn start(&mut self) -> bool {
        let started = self.state.start();
        if started {
            self.accumulator = 0.0;
        }
        started
    }

    /// Play-again signal from the host UI
    pub fn restart(&mut self) -> bool {
        let restarted = self.state.restart();
        if restarted {
            self.accumulator = 0.0;
        }
        restarted
    }

    /// Advance by one host frame of `elapsed` real seconds
    pub fn frame(&mut self, elapsed: f32, input: &mut impl InputSource) -> FrameReport {
        let dt = self.state.tuning.fixed_dt;
        let frame_dt = if elapsed.is_finite() {
            elapsed.clamp(0.0, self.state.tuning.max_frame_dt)
        } else {
            0.0
        };

        let mut steps = 0;
        if self.state.phase == GamePhase::Running {
            self.accumulator += frame_dt;
            while self.accumulator >= dt {
                let sampled = input.sample(&self.state);
                tick(&mut self.state, &sampled, dt);
                self.accumulator -= dt;
                steps += 1;

                if self.state.phase != GamePhase::Running {
                    self.accumulator = 0.0;
                    break;
                }
            }
        }

        self.state.frame_update(frame_dt);

        FrameReport {
            steps,
            events: self.state.drain_events(),
        }
    }

    /// Everything the presentation layer draws this frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }
}
