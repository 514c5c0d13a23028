//! Treasure Dash entry point
//!
//! On the web the host engine drives the scene through `bindings`. Natively
//! this runs a headless session per preset with a scripted player.

#[cfg(not(target_arch = "wasm32"))]
use treasure_dash::sim::GameState;

/// Hold the pointer unless stepping forward would walk into an enemy
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(state: &GameState) -> bool {
    let mut next = state.player.clone();
    next.pos.x += next.speed;
    let next_bounds = next.bounds();

    !state.enemies.iter().any(|enemy| {
        let mut ahead = enemy.clone();
        ahead.patrol(&state.lane);
        next_bounds.intersects(&ahead.bounds())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use treasure_dash::consts::FRAME_RATE;
    use treasure_dash::{Preset, Session, Settings};

    env_logger::init();
    log::info!("Treasure Dash (native) starting...");

    let seed = std::env::var("TREASURE_DASH_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);
    let minutes = 2;

    for preset in Preset::ALL {
        let mut session = Session::new(preset.config(), Settings::default(), seed);
        for _ in 0..minutes * 60 * FRAME_RATE {
            let hold = session.state().is_playing() && autopilot(session.state());
            session.frame(hold);
        }

        let stats = session.stats();
        log::info!(
            "{} preset: {} runs, {} won, {} lost, {} frames played",
            preset.as_str(),
            stats.runs_started,
            stats.wins,
            stats.losses,
            stats.frames_played
        );
        println!(
            "{:<8} won {:>3}  lost {:>3}",
            preset.as_str(),
            stats.wins,
            stats.losses
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is bindings::start, this is just to satisfy the compiler
}
