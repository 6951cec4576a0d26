//! Horizontal camera follow

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// World x of the viewport's left edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    /// Ease toward keeping the player a third of the way into the view,
    /// then clamp to the level. Called once per rendered frame.
    pub fn update(&mut self, player_x: f32, level_width: f32, tuning: &Tuning) {
        let target = player_x - tuning.viewport_width * tuning.camera_lead;
        self.x += (target - self.x) * tuning.camera_smoothing;

        let max_x = (level_width - tuning.viewport_width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }
}
