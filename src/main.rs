//! Barrage headless runner
//!
//! Drives the simulation without a renderer: a scripted drag sweeps the
//! player along the bottom of the field while the enemy cycles its
//! patterns. Useful for eyeballing pacing via the event log and for
//! profiling the tick loop.

use glam::Vec2;

use barrage::DragInput;
use barrage::consts::*;
use barrage::sim::{GameEvent, GameState, RenderSnapshot, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);

    let mut state = GameState::new(seed);
    log::info!("simulating {} ticks with seed {}", ticks, seed);

    // Grab the player dead-center and never let go
    let mut drag = DragInput::default();
    drag.engage(state.player.pos, state.player.pos);

    let mut hits = 0u32;
    for i in 0..ticks {
        // Sweep the finger side to side along the bottom, like a cautious
        // player
        let sweep = (i as f32 * 0.01).sin();
        let finger = Vec2::new(
            WORLD_W / 2.0 + sweep * (WORLD_W / 2.0 - PLAYER_RADIUS),
            WORLD_H - PLAYER_SPAWN_BOTTOM_OFFSET,
        );
        let input = TickInput {
            target: drag.update(finger),
        };
        tick(&mut state, &input);

        for event in &state.events {
            log::info!("tick {}: {:?}", state.tick_count, event);
            if matches!(event, GameEvent::PlayerHit) {
                hits += 1;
            }
        }
    }

    let snapshot = RenderSnapshot::capture(&state);
    println!(
        "ran {} ticks: {} bullets in flight, {} resets, enemy mode {:?}",
        state.tick_count,
        snapshot.bullets.len(),
        hits,
        state.enemy.mode
    );
}
