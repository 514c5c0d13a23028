//! Game state and core simulation types
//!
//! Everything a run needs between frames lives here; the host owns the
//! value and threads it through [`super::tick`] once per frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use crate::instance::{SpriteInstance, SpriteKind};
use crate::tuning::GameConfig;

/// How a finished run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player reached the treasure
    Won,
    /// Player touched an enemy
    Lost,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Phase of a single play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Playing,
    /// Terminal until the scene is re-initialized
    Ended(Outcome),
}

impl RunState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, RunState::Playing)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RunState::Playing => None,
            RunState::Ended(outcome) => Some(*outcome),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Playing => "playing",
            RunState::Ended(outcome) => outcome.as_str(),
        }
    }
}

/// Events produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The run left `Playing` on this frame
    RunEnded { outcome: Outcome, at: Vec2 },
}

/// The walking player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Displayed size (texture size times scale)
    pub size: Vec2,
    /// Horizontal distance per frame while input is held
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// A vertically patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Signed vertical speed (positive = down)
    pub speed: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            id,
            pos,
            size,
            speed,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Move one frame and turn around at the lane limits.
    ///
    /// The position is not clamped, so an enemy can overshoot a limit by
    /// up to one frame of travel before heading back.
    pub fn patrol(&mut self, lane: &EnemyLane) {
        self.pos.y += self.speed;

        let turn_up = self.speed > 0.0 && self.pos.y >= lane.max_y;
        let turn_down = self.speed < 0.0 && self.pos.y <= lane.min_y;
        if turn_up || turn_down {
            self.speed = -self.speed;
        }
    }
}

/// The goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treasure {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Treasure {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// Vertical limits enemies patrol between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyLane {
    pub min_y: f32,
    pub max_y: f32,
}

impl EnemyLane {
    pub fn new(min_y: f32, max_y: f32) -> Self {
        Self { min_y, max_y }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete state of one run (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub run_state: RunState,
    /// Frames simulated while playing
    pub frame: u64,
    pub player: Player,
    pub treasure: Treasure,
    /// Enemies in creation order (sorted by id)
    pub enemies: Vec<Enemy>,
    pub lane: EnemyLane,
}

impl GameState {
    /// Set up a run whose enemy speeds come from `seed`
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = RngState::new(seed).to_rng();
        super::spawn::initialize(config, &mut rng)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.run_state.is_playing()
    }

    /// Packed sprite records: player, treasure, then enemies in order
    pub fn sprite_instances(&self) -> Vec<SpriteInstance> {
        let mut out = Vec::with_capacity(2 + self.enemies.len());
        out.push(SpriteInstance::new(
            SpriteKind::Player,
            self.player.pos,
            self.player.size,
        ));
        out.push(SpriteInstance::new(
            SpriteKind::Treasure,
            self.treasure.pos,
            self.treasure.size,
        ));
        out.extend(
            self.enemies
                .iter()
                .map(|e| SpriteInstance::new(SpriteKind::Enemy, e.pos, e.size)),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane() -> EnemyLane {
        EnemyLane::new(80.0, 280.0)
    }

    #[test]
    fn test_patrol_moves_by_speed() {
        let mut enemy = Enemy::new(1, Vec2::new(0.0, 100.0), Vec2::splat(10.0), 2.5);
        enemy.patrol(&lane());
        assert_eq!(enemy.pos.y, 102.5);
        assert_eq!(enemy.speed, 2.5);
    }

    #[test]
    fn test_patrol_turns_at_max() {
        let mut enemy = Enemy::new(1, Vec2::new(0.0, 278.0), Vec2::splat(10.0), 2.0);
        enemy.patrol(&lane());
        assert_eq!(enemy.pos.y, 280.0);
        assert_eq!(enemy.speed, -2.0);
    }

    #[test]
    fn test_patrol_overshoots_without_clamping() {
        let mut enemy = Enemy::new(1, Vec2::new(0.0, 81.0), Vec2::splat(10.0), -3.0);
        enemy.patrol(&lane());
        assert_eq!(enemy.pos.y, 78.0);
        assert_eq!(enemy.speed, 3.0);
    }

    #[test]
    fn test_patrol_only_turns_in_direction_of_travel() {
        // Already beyond the lower limit but heading back: no flip
        let mut enemy = Enemy::new(1, Vec2::new(0.0, 78.0), Vec2::splat(10.0), 3.0);
        enemy.patrol(&lane());
        assert_eq!(enemy.pos.y, 81.0);
        assert_eq!(enemy.speed, 3.0);
    }

    #[test]
    fn test_run_state_outcome() {
        assert_eq!(RunState::Playing.outcome(), None);
        assert_eq!(RunState::Ended(Outcome::Won).outcome(), Some(Outcome::Won));
        assert!(!RunState::Ended(Outcome::Lost).is_playing());
        assert_eq!(RunState::Ended(Outcome::Lost).as_str(), "lost");
    }

    #[test]
    fn test_sprite_instances_order() {
        let state = GameState::new(&GameConfig::default(), 7);
        let sprites = state.sprite_instances();
        assert_eq!(sprites.len(), 2 + state.enemies.len());
        assert_eq!(sprites[0].kind(), Some(SpriteKind::Player));
        assert_eq!(sprites[1].kind(), Some(SpriteKind::Treasure));
        assert!(sprites[2..].iter().all(|s| s.kind() == Some(SpriteKind::Enemy)));
        assert_eq!(sprites[2].x, state.enemies[0].pos.x);
    }
}
