//! Host-side session director
//!
//! Owns the mutable run, drives it at a fixed timestep from the host's
//! variable frame deltas, and turns a finished run into presentation cues:
//! shake and outcome on the ending frame, a fade shortly after, then a
//! fresh run. The host only has to play the cues back.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::ms_to_frames;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Outcome, RngState, TickInput, initialize, tick};
use crate::tuning::GameConfig;

/// Presentation work the host should perform, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cue", rename_all = "snake_case")]
pub enum HostCue {
    CameraShake { duration_ms: u32 },
    ShowOutcome { outcome: Outcome },
    ParticleBurst { x: f32, y: f32, outcome: Outcome },
    CameraFade { duration_ms: u32 },
    /// Clear any camera effects left over from the previous run
    ResetEffects,
    /// A new run has been set up; `run` counts from 1
    Restarted { run: u32 },
}

/// Running tally for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub runs_started: u32,
    pub wins: u32,
    pub losses: u32,
    /// Frames simulated while a run was in play
    pub frames_played: u64,
}

impl SessionStats {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.wins += 1,
            Outcome::Lost => self.losses += 1,
        }
    }
}

/// A finished run waiting on its delayed fade and restart
#[derive(Debug, Clone, Copy)]
struct Ending {
    frames: u32,
}

/// Game session holding the current run and its presentation timers
pub struct Session {
    config: GameConfig,
    settings: Settings,
    rng: Pcg32,
    state: GameState,
    accumulator: f32,
    ending: Option<Ending>,
    stats: SessionStats,
    fade_delay_frames: u32,
    restart_delay_frames: u32,
}

impl Session {
    pub fn new(config: GameConfig, settings: Settings, seed: u64) -> Self {
        config.warn_if_degenerate();

        let mut rng = RngState::new(seed).to_rng();
        let state = initialize(&config, &mut rng);
        log::info!(
            "Session started with seed {} ({} enemies)",
            seed,
            state.enemies.len()
        );

        Self {
            config,
            settings,
            rng,
            state,
            accumulator: 0.0,
            ending: None,
            stats: SessionStats {
                runs_started: 1,
                ..Default::default()
            },
            fade_delay_frames: ms_to_frames(FADE_DELAY_MS),
            restart_delay_frames: ms_to_frames(RESTART_DELAY_MS),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Whether a finished run is still being presented
    pub fn is_presenting_end(&self) -> bool {
        self.ending.is_some()
    }

    /// Feed one host frame of `dt` seconds.
    ///
    /// Runs as many fixed frames as the accumulated time allows, capped at
    /// `MAX_SUBSTEPS`, all with the same pointer sample.
    pub fn advance(&mut self, dt: f32, pointer_down: bool) -> Vec<HostCue> {
        // NaN or negative deltas (e.g. `undefined` from JS) count as no time
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut cues = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.frame_into(pointer_down, &mut cues);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        cues
    }

    /// Run exactly one fixed frame
    pub fn frame(&mut self, pointer_down: bool) -> Vec<HostCue> {
        let mut cues = Vec::new();
        self.frame_into(pointer_down, &mut cues);
        cues
    }

    /// Throw away the current run and start a new one immediately
    pub fn restart(&mut self) -> Vec<HostCue> {
        let mut cues = Vec::new();
        self.restart_into(&mut cues);
        cues
    }

    fn frame_into(&mut self, pointer_down: bool, cues: &mut Vec<HostCue>) {
        if let Some(ending) = self.ending.as_mut() {
            // Input is ignored while the ending plays out
            ending.frames += 1;
            let elapsed = ending.frames;

            if elapsed == self.fade_delay_frames && self.settings.effective_camera_fade() {
                cues.push(HostCue::CameraFade {
                    duration_ms: FADE_DURATION_MS,
                });
            }
            if elapsed >= self.restart_delay_frames {
                self.restart_into(cues);
            }
            return;
        }

        self.stats.frames_played += 1;
        let input = TickInput { pointer_down };
        if let Some(GameEvent::RunEnded { outcome, at }) = tick(&mut self.state, &input) {
            self.stats.record(outcome);
            self.ending = Some(Ending { frames: 0 });
            self.present_end(outcome, at, cues);
        }
    }

    fn present_end(&self, outcome: Outcome, player_pos: Vec2, cues: &mut Vec<HostCue>) {
        if self.settings.effective_screen_shake() {
            cues.push(HostCue::CameraShake {
                duration_ms: SHAKE_DURATION_MS,
            });
        }
        if self.settings.outcome_text {
            cues.push(HostCue::ShowOutcome { outcome });
        }
        if self.settings.particles {
            let at = match outcome {
                Outcome::Won => self.state.treasure.pos,
                Outcome::Lost => player_pos,
            };
            cues.push(HostCue::ParticleBurst {
                x: at.x,
                y: at.y,
                outcome,
            });
        }
    }

    fn restart_into(&mut self, cues: &mut Vec<HostCue>) {
        self.state = initialize(&self.config, &mut self.rng);
        self.ending = None;
        self.accumulator = 0.0;
        self.stats.runs_started += 1;

        log::info!(
            "Run {} started (won {}, lost {})",
            self.stats.runs_started,
            self.stats.wins,
            self.stats.losses
        );

        cues.push(HostCue::ResetEffects);
        cues.push(HostCue::Restarted {
            run: self.stats.runs_started,
        });
    }
}
