//! Per-frame simulation step
//!
//! Core game loop that advances one run deterministically.

use super::state::{Enemy, EnemyLane, GameEvent, GameState, Outcome, Player, RunState, Treasure};

/// Input sampled by the host for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Pointer or touch is held down this frame
    pub pointer_down: bool,
}

impl TickInput {
    pub fn held() -> Self {
        Self { pointer_down: true }
    }
}

/// Advance the entities of a run by one frame.
///
/// Does nothing unless `run` is `Playing`. The treasure is checked before
/// any enemy moves, so a frame that overlaps both ends as `Won`. Enemies
/// are processed in slice order and the first one touching the player
/// ends the run; later enemies do not move on that frame.
pub fn step(
    run: RunState,
    player: &mut Player,
    treasure: &Treasure,
    enemies: &mut [Enemy],
    lane: &EnemyLane,
    input_active: bool,
) -> RunState {
    if !run.is_playing() {
        return run;
    }

    if input_active {
        player.pos.x += player.speed;
    }

    let player_bounds = player.bounds();
    if player_bounds.intersects(&treasure.bounds()) {
        return RunState::Ended(Outcome::Won);
    }

    for enemy in enemies.iter_mut() {
        enemy.patrol(lane);

        if player_bounds.intersects(&enemy.bounds()) {
            log::trace!("Enemy {} caught the player at {}", enemy.id, player.pos);
            return RunState::Ended(Outcome::Lost);
        }
    }

    RunState::Playing
}

/// Advance the game state by one frame.
///
/// Returns an event on the frame the run ends; afterwards the state is
/// frozen until the host builds a new one.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<GameEvent> {
    if !state.is_playing() {
        return None;
    }

    state.frame += 1;
    state.run_state = step(
        state.run_state,
        &mut state.player,
        &state.treasure,
        &mut state.enemies,
        &state.lane,
        input.pointer_down,
    );

    log::trace!(
        "frame {} player x={:.1} state={}",
        state.frame,
        state.player.pos.x,
        state.run_state.as_str()
    );

    let outcome = state.run_state.outcome()?;
    log::info!(
        "Run {} on frame {} at x={:.1}",
        outcome.as_str(),
        state.frame,
        state.player.pos.x
    );
    Some(GameEvent::RunEnded {
        outcome,
        at: state.player.pos,
    })
}
