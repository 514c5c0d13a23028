//! Data-driven game balance
//!
//! Every number the frame step or scene setup reads comes from a
//! [`GameConfig`]. Two presets ship with the game; hosts may override any
//! field with a JSON object.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// Unscaled texture dimensions of a sprite (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: f32,
    pub height: f32,
}

impl SpriteSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Displayed size after applying a uniform scale
    #[inline]
    pub fn scaled(&self, scale: f32) -> Vec2 {
        Vec2::new(self.width * scale, self.height * scale)
    }
}

/// Shipped tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Enemy speeds drawn from 1.0..3.0 per frame
    #[default]
    Classic,
    /// Enemy speeds drawn from 2.0..4.5 per frame
    Brisk,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Brisk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Brisk => "Brisk",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "default" => Some(Preset::Classic),
            "brisk" | "fast" => Some(Preset::Brisk),
            _ => None,
        }
    }

    /// Enemy speed range (min, max) for this preset
    pub fn enemy_speed_range(&self) -> (f32, f32) {
        match self {
            Preset::Classic => (1.0, 3.0),
            Preset::Brisk => (2.0, 4.5),
        }
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::from_preset(*self)
    }
}

/// Scene tuning, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Scene ===
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    /// Horizontal distance walked per frame while the pointer is down
    pub player_speed: f32,
    /// Starting x; the player always starts vertically centered
    pub player_start_x: f32,
    pub player_size: SpriteSize,
    pub player_scale: f32,

    // === Treasure ===
    /// Distance of the treasure from the right edge of the scene
    pub treasure_inset: f32,
    pub treasure_size: SpriteSize,
    pub treasure_scale: f32,

    // === Enemies ===
    pub enemy_count: usize,
    /// Position of the first enemy
    pub enemy_origin: Vec2,
    /// Offset between consecutive enemies
    pub enemy_step: Vec2,
    pub enemy_size: SpriteSize,
    pub enemy_scale: f32,
    /// Vertical bounds enemies turn around at
    pub enemy_min_y: f32,
    pub enemy_max_y: f32,
    /// Speed magnitude range (pixels per frame)
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Classic)
    }
}

impl GameConfig {
    /// Build the configuration for a preset
    pub fn from_preset(preset: Preset) -> Self {
        let (enemy_min_speed, enemy_max_speed) = preset.enemy_speed_range();
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            player_speed: 3.0,
            player_start_x: 40.0,
            player_size: SpriteSize::new(64.0, 80.0),
            player_scale: 0.5,

            treasure_inset: 80.0,
            treasure_size: SpriteSize::new(80.0, 72.0),
            treasure_scale: 0.6,

            enemy_count: 6,
            enemy_origin: Vec2::new(110.0, 100.0),
            enemy_step: Vec2::new(120.0, 20.0),
            enemy_size: SpriteSize::new(120.0, 96.0),
            enemy_scale: 0.5,
            enemy_min_y: 80.0,
            enemy_max_y: 280.0,
            enemy_min_speed,
            enemy_max_speed,
        }
    }

    /// Parse host overrides; fields left out keep their Classic values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Player spawn point
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.player_start_x, self.world_height / 2.0)
    }

    /// Treasure position
    pub fn treasure_position(&self) -> Vec2 {
        Vec2::new(
            self.world_width - self.treasure_inset,
            self.world_height / 2.0,
        )
    }

    /// Spawn point of enemy `index`
    pub fn enemy_position(&self, index: usize) -> Vec2 {
        self.enemy_origin + self.enemy_step * index as f32
    }

    /// Warn about settings that make the scene degenerate.
    ///
    /// Nothing here is rejected: the frame step still runs, it just
    /// behaves oddly (no enemies, enemies reversing every frame, ...).
    pub fn warn_if_degenerate(&self) {
        if self.enemy_count == 0 {
            log::warn!("Config has no enemies; runs can only be won");
        }
        if self.enemy_min_y > self.enemy_max_y {
            log::warn!(
                "Enemy bounds inverted ({} > {}); enemies will reverse every frame",
                self.enemy_min_y,
                self.enemy_max_y
            );
        }
        if self.enemy_min_speed > self.enemy_max_speed {
            log::warn!(
                "Enemy speed range inverted ({} > {})",
                self.enemy_min_speed,
                self.enemy_max_speed
            );
        }
        if self.player_speed <= 0.0 {
            log::warn!("Player speed {} cannot reach the treasure", self.player_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_only_in_enemy_speed() {
        let classic = Preset::Classic.config();
        let mut brisk = Preset::Brisk.config();
        assert_eq!(brisk.enemy_min_speed, 2.0);
        assert_eq!(brisk.enemy_max_speed, 4.5);

        brisk.enemy_min_speed = classic.enemy_min_speed;
        brisk.enemy_max_speed = classic.enemy_max_speed;
        assert_eq!(classic, brisk);
    }

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.player_start(), Vec2::new(40.0, 250.0));
        assert_eq!(config.treasure_position(), Vec2::new(920.0, 250.0));
        assert_eq!(config.enemy_position(0), Vec2::new(110.0, 100.0));
        assert_eq!(config.enemy_position(5), Vec2::new(710.0, 200.0));
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(Preset::from_name("CLASSIC"), Some(Preset::Classic));
        assert_eq!(Preset::from_name("fast"), Some(Preset::Brisk));
        assert_eq!(Preset::from_name("turbo"), None);
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.as_str()), Some(preset));
        }
    }

    #[test]
    fn test_partial_json_override() {
        let config = GameConfig::from_json(r#"{"player_speed": 5.0, "enemy_count": 2}"#)
            .expect("valid json");
        assert_eq!(config.player_speed, 5.0);
        assert_eq!(config.enemy_count, 2);
        assert_eq!(config.enemy_max_y, 280.0);
    }

    #[test]
    fn test_json_vec_fields() {
        let config = GameConfig::from_json(r#"{"enemy_step": [60.0, 0.0]}"#).expect("valid json");
        assert_eq!(config.enemy_step, Vec2::new(60.0, 0.0));

        let json = serde_json::to_string(&config).expect("serializable");
        assert_eq!(GameConfig::from_json(&json).expect("round trip"), config);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(GameConfig::from_json("{\"player_speed\": \"fast\"}").is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }
}
