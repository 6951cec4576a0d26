//! Static level geometry
//!
//! Platforms, pits and the goal are fixed once built. Hazards are kept as
//! spawn specs so a restart can rebuild them with fresh patrol state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::hazard::{Hazard, HazardSpec};
use super::rect::Rect;
use crate::consts::*;

/// Visual category of a platform. Cosmetic to the physics, except that the
/// goal stands on the `GoalStructure` platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    Ground,
    Floating,
    GoalStructure,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind,
        }
    }
}

/// A gap in the ground, `[x_start, x_end)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pit {
    pub x_start: f32,
    pub x_end: f32,
}

impl Pit {
    pub const fn new(x_start: f32, x_end: f32) -> Self {
        Self { x_start, x_end }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_end - self.x_start
    }
}

/// Ground gaps of the standard level
const PITS: [Pit; 3] = [
    Pit::new(640.0, 800.0),
    Pit::new(1600.0, 1760.0),
    Pit::new(2800.0, 2990.0),
];

const FLOATING_PLATFORMS: [(f32, f32, f32); 9] = [
    (300.0, 360.0, 160.0),
    (680.0, 340.0, 120.0),
    (1100.0, 320.0, 180.0),
    (1640.0, 330.0, 120.0),
    (2100.0, 300.0, 200.0),
    (2500.0, 350.0, 140.0),
    (2850.0, 310.0, 140.0),
    (3200.0, 360.0, 160.0),
    (3600.0, 320.0, 140.0),
];
const FLOATING_THICKNESS: f32 = 20.0;

/// Raised block the goal stands on
const CASTLE_X: f32 = 4300.0;
const CASTLE_WIDTH: f32 = 260.0;
const CASTLE_RISE: f32 = 96.0;

const GOAL_X: f32 = 4400.0;
const GOAL_SIZE: Vec2 = Vec2::new(28.0, 48.0);

const HAZARD_SIZE: f32 = 28.0;
const HAZARDS: [HazardSpec; 3] = [
    HazardSpec::horizontal(440.0, GROUND_Y - HAZARD_SIZE, HAZARD_SIZE, 440.0, 620.0, 120.0),
    HazardSpec::horizontal(2100.0, 300.0 - HAZARD_SIZE, HAZARD_SIZE, 2100.0, 2270.0, 100.0),
    HazardSpec::horizontal(2600.0, GROUND_Y - HAZARD_SIZE, HAZARD_SIZE, 2580.0, 2780.0, 140.0),
];

/// The playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    width: f32,
    ground_y: f32,
    platforms: Vec<Platform>,
    pits: Vec<Pit>,
    goal: Goal,
    hazard_specs: Vec<HazardSpec>,
    /// Live hazards, rebuilt from `hazard_specs` on restart
    pub hazards: Vec<Hazard>,
}

impl Level {
    /// Build the standard level
    pub fn build() -> Self {
        let mut platforms = ground_platforms(&PITS, LEVEL_WIDTH, GROUND_Y);

        platforms.extend(FLOATING_PLATFORMS.iter().map(|&(x, y, w)| {
            Platform::new(x, y, w, FLOATING_THICKNESS, PlatformKind::Floating)
        }));

        platforms.push(Platform::new(
            CASTLE_X,
            GROUND_Y - CASTLE_RISE,
            CASTLE_WIDTH,
            CASTLE_RISE + TILE * 2.0,
            PlatformKind::GoalStructure,
        ));

        let goal = Goal::new(
            Vec2::new(GOAL_X, GROUND_Y - CASTLE_RISE - GOAL_SIZE.y),
            GOAL_SIZE,
        );

        Self::new(
            LEVEL_WIDTH,
            GROUND_Y,
            platforms,
            PITS.to_vec(),
            goal,
            HAZARDS.to_vec(),
        )
    }

    /// Assemble a level from parts.
    ///
    /// # Panics
    ///
    /// Panics if the parts violate level invariants: pits must be sorted,
    /// disjoint and inside `[0, width]`; every rectangle must have positive
    /// size; every hazard must fit its patrol range.
    pub fn new(
        width: f32,
        ground_y: f32,
        platforms: Vec<Platform>,
        pits: Vec<Pit>,
        goal: Goal,
        hazard_specs: Vec<HazardSpec>,
    ) -> Self {
        assert!(width > 0.0, "level width must be positive");

        let mut cursor = 0.0;
        for pit in &pits {
            assert!(
                pit.x_start >= cursor && pit.x_start < pit.x_end && pit.x_end <= width,
                "pit [{}, {}) overlaps another pit or leaves [0, {}]",
                pit.x_start,
                pit.x_end,
                width
            );
            cursor = pit.x_end;
        }

        for platform in &platforms {
            assert!(platform.rect.is_valid(), "degenerate platform {:?}", platform.rect);
        }
        assert!(goal.bounds().is_valid(), "degenerate goal {:?}", goal.bounds());

        for spec in &hazard_specs {
            assert!(
                spec.size.x > 0.0 && spec.size.y > 0.0,
                "degenerate hazard {:?}",
                spec
            );
            assert!(
                spec.max_bound - spec.min_bound >= spec.extent(),
                "hazard patrol [{}, {}] narrower than hazard",
                spec.min_bound,
                spec.max_bound
            );
        }

        let hazards = hazard_specs.iter().map(HazardSpec::spawn).collect();

        log::debug!(
            "Level built: width={}, platforms={}, pits={}, hazards={}",
            width,
            platforms.len(),
            pits.len(),
            hazard_specs.len()
        );

        Self {
            width,
            ground_y,
            platforms,
            pits,
            goal,
            hazard_specs,
            hazards,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    #[inline]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    #[inline]
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    #[inline]
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    #[inline]
    pub fn goal_mut(&mut self) -> &mut Goal {
        &mut self.goal
    }

    #[inline]
    pub fn hazard_specs(&self) -> &[HazardSpec] {
        &self.hazard_specs
    }

    /// Rebuild every hazard at its spawn with initial patrol direction
    pub fn reset_hazards(&mut self) {
        self.hazards = self.hazard_specs.iter().map(HazardSpec::spawn).collect();
    }

    /// Platform the goal stands on, if the level has one
    pub fn goal_structure(&self) -> Option<&Platform> {
        self.platforms
            .iter()
            .find(|p| p.kind == PlatformKind::GoalStructure)
    }

    /// True if `rect` has dropped into a pit: its bottom is at or below
    /// `floor_y` and it is horizontally inside a pit. Diagnostic only;
    /// physics kills the player by depth alone.
    pub fn is_over_pit(&self, rect: &Rect, floor_y: f32) -> bool {
        if rect.bottom() < self.ground_y + 4.0 {
            return false;
        }
        self.pits.iter().any(|pit| {
            let in_pit = rect.right() > pit.x_start && rect.x < pit.x_end;
            in_pit && rect.bottom() >= floor_y
        })
    }
}

/// Ground strips covering `[0, width)` minus the pits
pub fn ground_platforms(pits: &[Pit], width: f32, ground_y: f32) -> Vec<Platform> {
    let height = TILE * 2.0;
    let mut platforms = Vec::with_capacity(pits.len() + 1);
    let mut cursor = 0.0;

    for pit in pits {
        if pit.x_start > cursor {
            platforms.push(Platform::new(
                cursor,
                ground_y,
                pit.x_start - cursor,
                height,
                PlatformKind::Ground,
            ));
        }
        cursor = pit.x_end;
    }
    if cursor < width {
        platforms.push(Platform::new(
            cursor,
            ground_y,
            width - cursor,
            height,
            PlatformKind::Ground,
        ));
    }

    platforms
}
