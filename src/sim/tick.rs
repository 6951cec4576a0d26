//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one fixed step. Order within a
//! step is fixed: player, hazards, goal, then fall / hazard / goal checks
//! against the player's new position.

use serde::{Deserialize, Serialize};

use super::state::{DeathCause, GamePhase, GameState};

/// Logical actions sampled once per fixed step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Give up and respawn (counts as a failure)
    pub restart: bool,
}

impl TickInput {
    /// -1, 0 or +1; opposite directions cancel
    #[inline]
    pub fn move_dir(&self) -> f32 {
        self.move_right as i8 as f32 - self.move_left as i8 as f32
    }
}

/// Advance the session by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Restart key fires once per press
    let restart_pressed = input.restart && !state.restart_held;
    state.restart_held = input.restart;
    if restart_pressed {
        state.fail(DeathCause::Manual);
        return;
    }

    state.time_ticks += 1;

    state
        .player
        .update(input, &state.level, &state.tuning, dt);
    for hazard in &mut state.level.hazards {
        hazard.update(dt);
    }
    state.level.goal_mut().update(dt);

    if state.player.pos.y > state.tuning.death_threshold() {
        state.fail(DeathCause::Fell);
        return;
    }

    let player_box = state.player.bounds();
    if state.level.hazards.iter().any(|h| h.occupies(&player_box)) {
        state.fail(DeathCause::Hazard);
        return;
    }

    if state.level.goal().occupies(&player_box) {
        state.win();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::SimEvent;
    use crate::sim::goal::Goal;
    use crate::sim::hazard::HazardSpec;
    use crate::sim::level::{Level, Pit, ground_platforms};
    use crate::tuning::Tuning;
    use glam::Vec2;

    const RIGHT: TickInput = TickInput {
        move_left: false,
        move_right: true,
        jump: false,
        restart: false,
    };

    fn level_with(pits: Vec<Pit>, goal_x: f32, hazards: Vec<HazardSpec>) -> Level {
        let platforms = ground_platforms(&pits, LEVEL_WIDTH, GROUND_Y);
        let goal = Goal::new(Vec2::new(goal_x, GROUND_Y - 48.0), Vec2::new(28.0, 48.0));
        Level::new(LEVEL_WIDTH, GROUND_Y, platforms, pits, goal, hazards)
    }

    fn running(level: Level) -> GameState {
        let mut state = GameState::with_level(level, Tuning::default());
        state.start();
        state.drain_events();
        state
    }

    #[test]
    fn test_move_dir() {
        assert_eq!(TickInput::default().move_dir(), 0.0);
        assert_eq!(RIGHT.move_dir(), 1.0);
        let both = TickInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        assert_eq!(both.move_dir(), 0.0);
    }

    #[test]
    fn test_no_steps_before_start() {
        let mut state = GameState::new(Tuning::default());
        let before = state.player.clone();
        tick(&mut state, &RIGHT, SIM_DT);
        assert_eq!(state.player, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_walking_into_pit_counts_one_failure() {
        let mut state = running(level_with(vec![Pit::new(300.0, 460.0)], 4700.0, Vec::new()));

        let mut fell_at = None;
        for i in 0..2000 {
            tick(&mut state, &RIGHT, SIM_DT);
            if state.failures > 0 {
                fell_at = Some(i);
                break;
            }
        }

        assert!(fell_at.is_some(), "never fell");
        assert_eq!(state.failures, 1);
        assert_eq!(state.player.pos, state.player.spawn);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(
            state.drain_events(),
            vec![SimEvent::Died {
                cause: DeathCause::Fell,
                failures: 1
            }]
        );
    }

    #[test]
    fn test_hazard_contact_respawns() {
        // Hazard parked right next to spawn
        let hazard = HazardSpec::horizontal(130.0, GROUND_Y - 28.0, 28.0, 130.0, 160.0, 0.0);
        let mut state = running(level_with(Vec::new(), 4700.0, vec![hazard]));

        for _ in 0..120 {
            tick(&mut state, &RIGHT, SIM_DT);
            if state.failures > 0 {
                break;
            }
        }
        assert_eq!(state.failures, 1);
        assert_eq!(state.player.pos, state.player.spawn);
        assert!(matches!(
            state.drain_events()[..],
            [SimEvent::Died {
                cause: DeathCause::Hazard,
                ..
            }]
        ));
    }

    #[test]
    fn test_standard_first_hazard_kills_walker() {
        let mut state = GameState::new(Tuning::default());
        state.start();
        for _ in 0..600 {
            tick(&mut state, &RIGHT, SIM_DT);
            if state.failures > 0 {
                break;
            }
        }
        assert_eq!(state.failures, 1);
        assert!(matches!(
            state.drain_events().last(),
            Some(SimEvent::Died {
                cause: DeathCause::Hazard,
                ..
            })
        ));
    }

    #[test]
    fn test_reaching_goal_wins_and_freezes() {
        let mut state = running(level_with(Vec::new(), 200.0, Vec::new()));

        for _ in 0..200 {
            tick(&mut state, &RIGHT, SIM_DT);
            if state.phase == GamePhase::Won {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.drain_events(), vec![SimEvent::Won { failures: 0 }]);

        let frozen = state.player.clone();
        let ticks = state.time_ticks;
        for _ in 0..100 {
            tick(&mut state, &RIGHT, SIM_DT);
        }
        assert_eq!(state.player, frozen);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_restart_after_win() {
        let hazard = HazardSpec::horizontal(1000.0, GROUND_Y - 28.0, 28.0, 900.0, 1200.0, 120.0);
        let mut state = running(level_with(vec![Pit::new(1500.0, 1600.0)], 200.0, vec![hazard]));
        let initial_hazards = state.level.hazards.clone();

        state.fail(DeathCause::Fell);
        for _ in 0..300 {
            tick(&mut state, &RIGHT, SIM_DT);
            if state.phase == GamePhase::Won {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::Won);
        assert_ne!(state.level.hazards, initial_hazards);

        assert!(state.restart());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.failures, 0);
        assert_eq!(state.player.pos, state.player.spawn);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.level.hazards, initial_hazards);
    }

    #[test]
    fn test_restart_key_is_edge_triggered() {
        let mut state = GameState::new(Tuning::default());
        state.start();
        let held = TickInput {
            restart: true,
            ..Default::default()
        };

        for _ in 0..10 {
            tick(&mut state, &held, SIM_DT);
        }
        assert_eq!(state.failures, 1);

        tick(&mut state, &TickInput::default(), SIM_DT);
        tick(&mut state, &held, SIM_DT);
        assert_eq!(state.failures, 2);
        assert!(matches!(
            state.drain_events().last(),
            Some(SimEvent::Died {
                cause: DeathCause::Manual,
                failures: 2
            })
        ));
    }

    #[test]
    fn test_hazards_and_goal_advance_each_step() {
        let mut state = GameState::new(Tuning::default());
        state.start();
        let x0 = state.level.hazards[0].pos.x;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.level.hazards[0].pos.x > x0);
        assert!(state.level.goal().bob_phase > 0.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(Tuning::default());
        let mut state2 = GameState::new(Tuning::default());
        state1.start();
        state2.start();

        let inputs = [
            RIGHT,
            TickInput {
                move_right: true,
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_left: true,
                ..Default::default()
            },
        ];

        for input in inputs.iter().cycle().take(800) {
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }

        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.level.hazards, state2.level.hazards);
        assert_eq!(state1.failures, state2.failures);
        assert_eq!(state1.time_ticks, state2.time_ticks);
    }
}
