//! Heart Dash headless host
//!
//! Drives a session the way a display host would: one `frame()` call per
//! displayed frame with jittered real-time deltas, the autopilot standing in
//! for the keyboard. Logs gameplay events and prints the final frame
//! snapshot as JSON.
//!
//! Usage: `heart-dash [tuning.json] [max_seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use heart_dash::Tuning;
    use heart_dash::sim::{Autopilot, Game, SimEvent};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Heart Dash (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let max_seconds: f32 = match args.next().map(|s| s.parse()) {
        Some(Ok(secs)) => secs,
        Some(Err(e)) => {
            log::warn!("Invalid max_seconds: {}; using 120", e);
            120.0
        }
        None => 120.0,
    };

    let mut game = Game::new(tuning);
    let mut pilot = Autopilot::new();
    // Frame pacing jitter around 60Hz, seeded so runs replay
    let mut rng = Pcg32::seed_from_u64(0x4845_4152);

    game.start();

    let mut wall_clock = 0.0f32;
    let mut frames = 0u64;
    let mut steps = 0u64;
    'run: while wall_clock < max_seconds {
        let elapsed = if rng.random_bool(0.01) {
            // Occasional stall (tab switch, GC pause)
            rng.random_range(0.1..0.5)
        } else {
            rng.random_range(0.012..0.021)
        };
        wall_clock += elapsed;
        frames += 1;

        let report = game.frame(elapsed, &mut pilot);
        steps += u64::from(report.steps);

        for event in report.events {
            match event {
                SimEvent::Died { cause, failures } => {
                    log::info!("t={:.2}s died ({:?}), failures={}", wall_clock, cause, failures);
                }
                SimEvent::Won { failures } => {
                    log::info!("t={:.2}s goal reached with {} failures", wall_clock, failures);
                    break 'run;
                }
                other => log::debug!("t={:.2}s {:?}", wall_clock, other),
            }
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "Finished: phase={:?}, frames={}, steps={}, failures={}",
        snapshot.phase,
        frames,
        steps,
        snapshot.failures
    );

    match snapshot.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Game::frame` from their own animation callback
}
