//! Presentation preferences
//!
//! Decide which cues the session hands the host when a run ends. The host
//! owns storage; these arrive as JSON or come from `Default`.

use serde::{Deserialize, Serialize};

/// Presentation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Camera shake when a run ends
    pub screen_shake: bool,
    /// Camera fade before the restart
    pub camera_fade: bool,
    /// Particle burst at the player or treasure
    pub particles: bool,
    /// Win/lose text
    pub outcome_text: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, no fade)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Visual effects - all on by default
            screen_shake: true,
            camera_fade: true,
            particles: true,
            outcome_text: true,

            // Accessibility
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective camera fade (respects reduced_motion)
    pub fn effective_camera_fade(&self) -> bool {
        self.camera_fade && !self.reduced_motion
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
