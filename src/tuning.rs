//! Data-driven physics tuning
//!
//! Every constant the player controller, camera and frame clock read at
//! runtime. Loaded from JSON; missing fields keep their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a tuning document is unusable
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// A length, duration or speed that must be > 0 is not
    NonPositive(&'static str),
    /// Jump velocity must point up (negative)
    JumpNotUpward(f32),
    /// Frame clamp shorter than one fixed step would never advance
    FrameClampBelowStep { max_frame_dt: f32, fixed_dt: f32 },
    /// A duration or margin that must be >= 0 is not
    Negative(&'static str),
    /// Jump cut must lie in (0, 1]
    JumpCutOutOfRange(f32),
    /// Camera smoothing must lie in (0, 1]
    SmoothingOutOfRange(f32),
    /// Camera lead is a viewport fraction in [0, 1]
    CameraLeadOutOfRange(f32),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NonPositive(field) => write!(f, "`{field}` must be positive"),
            TuningError::JumpNotUpward(v) => {
                write!(f, "`jump_velocity` must be negative (upward), got {v}")
            }
            TuningError::FrameClampBelowStep {
                max_frame_dt,
                fixed_dt,
            } => write!(
                f,
                "`max_frame_dt` ({max_frame_dt}) is shorter than `fixed_dt` ({fixed_dt})"
            ),
            TuningError::Negative(field) => write!(f, "`{field}` must not be negative"),
            TuningError::JumpCutOutOfRange(v) => {
                write!(f, "`jump_cut` must be in (0, 1], got {v}")
            }
            TuningError::SmoothingOutOfRange(v) => {
                write!(f, "`camera_smoothing` must be in (0, 1], got {v}")
            }
            TuningError::CameraLeadOutOfRange(v) => {
                write!(f, "`camera_lead` must be in [0, 1], got {v}")
            }
        }
    }
}

impl std::error::Error for TuningError {}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub gravity: f32,
    pub player_speed: f32,
    pub jump_velocity: f32,
    pub coyote_time: f32,
    pub jump_buffer: f32,
    pub terminal_fall_speed: f32,
    pub jump_cut: f32,
    pub player_width: f32,
    pub player_height: f32,

    // === Clock ===
    pub fixed_dt: f32,
    pub max_frame_dt: f32,

    // === Camera / viewport ===
    pub camera_smoothing: f32,
    pub camera_lead: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub death_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            jump_velocity: JUMP_VELOCITY,
            coyote_time: COYOTE_TIME,
            jump_buffer: JUMP_BUFFER,
            terminal_fall_speed: TERMINAL_FALL_SPEED,
            jump_cut: JUMP_CUT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            fixed_dt: SIM_DT,
            max_frame_dt: MAX_FRAME_DT,

            camera_smoothing: CAMERA_SMOOTHING,
            camera_lead: CAMERA_LEAD,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            death_margin: DEATH_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        let tuning = match Self::from_json(&json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        if let Err(e) = tuning.validate() {
            log::warn!("Rejected tuning {}: {}; using defaults", path.display(), e);
            return Self::default();
        }

        log::info!("Loaded tuning from {}", path.display());
        tuning
    }

    /// Check the values the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("gravity", self.gravity),
            ("player_speed", self.player_speed),
            ("terminal_fall_speed", self.terminal_fall_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("fixed_dt", self.fixed_dt),
            ("max_frame_dt", self.max_frame_dt),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NonPositive(field));
            }
        }

        let non_negative = [
            ("coyote_time", self.coyote_time),
            ("jump_buffer", self.jump_buffer),
            ("death_margin", self.death_margin),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative(field));
            }
        }

        if self.jump_velocity.is_nan() || self.jump_velocity >= 0.0 {
            return Err(TuningError::JumpNotUpward(self.jump_velocity));
        }
        if self.max_frame_dt < self.fixed_dt {
            return Err(TuningError::FrameClampBelowStep {
                max_frame_dt: self.max_frame_dt,
                fixed_dt: self.fixed_dt,
            });
        }
        if !(self.jump_cut > 0.0 && self.jump_cut <= 1.0) {
            return Err(TuningError::JumpCutOutOfRange(self.jump_cut));
        }
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            return Err(TuningError::SmoothingOutOfRange(self.camera_smoothing));
        }
        if !(0.0..=1.0).contains(&self.camera_lead) {
            return Err(TuningError::CameraLeadOutOfRange(self.camera_lead));
        }
        Ok(())
    }

    /// World y past which the player counts as fallen
    #[inline]
    pub fn death_threshold(&self) -> f32 {
        self.viewport_height + self.death_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.death_threshold(), 600.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 2000.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 2000.0);
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
        assert_eq!(tuning.fixed_dt, SIM_DT);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut tuning = Tuning::default();
        tuning.jump_cut = 0.8;
        let back = Tuning::from_json(&tuning.to_json().unwrap()).unwrap();
        assert_eq!(back, tuning);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let tuning = Tuning {
            jump_velocity: 100.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::JumpNotUpward(100.0)));

        let tuning = Tuning {
            fixed_dt: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::NonPositive("fixed_dt")));

        let tuning = Tuning {
            max_frame_dt: 0.001,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::FrameClampBelowStep { .. })
        ));

        let tuning = Tuning {
            camera_smoothing: 1.5,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::SmoothingOutOfRange(1.5)));

        // A cut above 1 would grow the rise every step
        let tuning = Tuning::from_json(r#"{ "jump_cut": 1.5 }"#).unwrap();
        assert_eq!(tuning.validate(), Err(TuningError::JumpCutOutOfRange(1.5)));

        let tuning = Tuning {
            jump_cut: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::JumpCutOutOfRange(0.0)));

        let tuning = Tuning {
            coyote_time: -0.1,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::Negative("coyote_time")));

        let tuning = Tuning {
            jump_buffer: f32::NAN,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::Negative("jump_buffer")));

        let tuning = Tuning {
            death_margin: -60.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::Negative("death_margin")));

        let tuning = Tuning {
            camera_lead: 1.2,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::CameraLeadOutOfRange(1.2)));

        let tuning = Tuning {
            camera_lead: -0.5,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::CameraLeadOutOfRange(-0.5)));

        // Zero coyote and buffer windows are strict but playable
        let tuning = Tuning {
            coyote_time: 0.0,
            jump_buffer: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_runaway_jump_cut() {
        let path = std::env::temp_dir().join("heart-dash-runaway-jump-cut.json");
        std::fs::write(&path, r#"{ "jump_cut": 1.5 }"#).unwrap();
        let tuning = Tuning::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load("/nonexistent/heart-dash-tuning.json");
        assert_eq!(tuning, Tuning::default());
    }
}
