//! Racer Shooter entry point
//!
//! Drives a scripted headless session through the four public operations:
//! a short firefight with the enemy straight ahead, then one full circuit of
//! the track. Useful for smoke-testing and for watching the simulation logs
//! (`RUST_LOG=debug cargo run`). The final state is printed as JSON.

use racer_shooter::sim::{GameState, InputState, Mode, advance_time, fire_primary};

fn main() {
    env_logger::init();
    log::info!("Racer Shooter (headless) starting...");

    let mut state = GameState::new(Mode::Playing);

    // Two shots, 2 hp: the first enemy goes down
    fire_primary(&mut state);
    advance_time(&mut state, 200.0);
    fire_primary(&mut state);
    advance_time(&mut state, 400.0);
    log::info!(
        "firefight done: {} enemies left, score {}",
        state.enemies.len(),
        state.score
    );

    // One counter-clockwise circuit of the checkpoint gates
    let legs = [
        (
            InputState {
                right: true,
                ..Default::default()
            },
            2000.0,
        ),
        (
            InputState {
                up: true,
                ..Default::default()
            },
            2200.0,
        ),
        (
            InputState {
                left: true,
                ..Default::default()
            },
            2200.0,
        ),
        (
            InputState {
                down: true,
                ..Default::default()
            },
            2200.0,
        ),
    ];
    for (snapshot, duration_ms) in legs {
        state.apply_input(snapshot);
        advance_time(&mut state, duration_ms);
    }
    log::info!(
        "circuit done: lap {}, next checkpoint {}, score {}",
        state.lap,
        state.next_checkpoint,
        state.score
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize final state: {err}"),
    }
}
