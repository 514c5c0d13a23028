//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, no wall-clock time
//! - Seeded RNG only (injected at scene setup)
//! - Stable iteration order (enemies by id)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use spawn::{initialize, roll_enemy_speed};
pub use state::{
    Enemy, EnemyLane, GameEvent, GameState, Outcome, Player, RngState, RunState, Treasure,
};
pub use tick::{TickInput, step, tick};
