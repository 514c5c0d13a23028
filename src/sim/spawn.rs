//! Scene setup
//!
//! Builds a fresh [`GameState`] the way the scene is laid out on create:
//! player on the left edge, treasure near the right edge, enemies in a
//! diagonal line between them.

use rand::Rng;

use super::state::{Enemy, EnemyLane, GameState, Player, RunState, Treasure};
use crate::tuning::GameConfig;

/// Draw one enemy speed from the configured range.
///
/// Uses `min + u * (max - min)` with `u` in `[0, 1)` so an empty or
/// inverted range still yields a number instead of panicking.
pub fn roll_enemy_speed<R: Rng>(config: &GameConfig, rng: &mut R) -> f32 {
    let u: f32 = rng.random();
    config.enemy_min_speed + u * (config.enemy_max_speed - config.enemy_min_speed)
}

/// Create the entities for a new run, in `Playing` state.
///
/// Enemy speeds are drawn in creation order, so the same RNG state always
/// produces the same scene.
pub fn initialize<R: Rng>(config: &GameConfig, rng: &mut R) -> GameState {
    let player = Player::new(
        config.player_start(),
        config.player_size.scaled(config.player_scale),
        config.player_speed,
    );

    let treasure = Treasure::new(
        config.treasure_position(),
        config.treasure_size.scaled(config.treasure_scale),
    );

    let enemy_size = config.enemy_size.scaled(config.enemy_scale);
    let enemies = (0..config.enemy_count)
        .map(|i| {
            let speed = roll_enemy_speed(config, rng);
            Enemy::new(i as u32 + 1, config.enemy_position(i), enemy_size, speed)
        })
        .collect();

    GameState {
        run_state: RunState::Playing,
        frame: 0,
        player,
        treasure,
        enemies,
        lane: EnemyLane::new(config.enemy_min_y, config.enemy_max_y),
    }
}
