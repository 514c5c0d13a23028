//! Treasure Dash - a tap-to-walk arcade scene
//!
//! Core modules:
//! - `sim`: Deterministic frame step (movement, bounds reversal, collisions)
//! - `tuning`: Data-driven game balance and presets
//! - `settings`: Presentation preferences handed over by the host
//! - `session`: Fixed-timestep director that presents outcomes and restarts runs
//! - `instance`: Packed sprite records for the host renderer
//! - `bindings`: JavaScript surface (wasm32 only)

pub mod instance;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use instance::{SpriteInstance, SpriteKind};
pub use session::{HostCue, Session, SessionStats};
pub use settings::Settings;
pub use tuning::{GameConfig, Preset};

/// Game configuration constants
pub mod consts {
    /// Frame rate the host drives the scene at
    pub const FRAME_RATE: u32 = 60;
    /// Fixed simulation timestep (one rendered frame)
    pub const SIM_DT: f32 = 1.0 / FRAME_RATE as f32;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Scene dimensions
    pub const WORLD_WIDTH: f32 = 1000.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Camera shake length when a run ends
    pub const SHAKE_DURATION_MS: u32 = 500;
    /// Delay before the camera fade starts, and the fade length
    pub const FADE_DELAY_MS: u32 = 250;
    pub const FADE_DURATION_MS: u32 = 250;
    /// Delay between the end of a run and the scene restart
    pub const RESTART_DELAY_MS: u32 = 500;
}

/// Convert a host timer delay to whole simulation frames
#[inline]
pub fn ms_to_frames(ms: u32) -> u32 {
    let frames = (u64::from(ms) * u64::from(consts::FRAME_RATE)).div_ceil(1000);
    u32::try_from(frames).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_frames() {
        assert_eq!(ms_to_frames(consts::FADE_DELAY_MS), 15);
        assert_eq!(ms_to_frames(consts::RESTART_DELAY_MS), 30);
        assert_eq!(ms_to_frames(0), 0);
        // Partial frames round up so a timer never fires early
        assert_eq!(ms_to_frames(10), 1);
        // No overflow for long delays
        assert_eq!(ms_to_frames(u32::MAX), 257_698_038);
    }
}
