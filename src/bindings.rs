//! JavaScript surface for the scene host
//!
//! The host engine owns sprites, input and effects. Each rendered frame it
//! calls [`Scene::frame`] with the elapsed time and pointer state, copies
//! positions out of [`Scene::sprites`], and plays back the returned cues.

use wasm_bindgen::prelude::*;

use crate::instance::{SpriteInstance, as_floats};
use crate::session::Session;
use crate::settings::Settings;
use crate::tuning::{GameConfig, Preset};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Treasure Dash module loaded");
}

fn js_error(context: &str, err: serde_json::Error) -> JsValue {
    log::error!("{}: {}", context, err);
    JsValue::from_str(&format!("{context}: {err}"))
}

#[wasm_bindgen]
pub struct Scene {
    session: Session,
}

#[wasm_bindgen]
impl Scene {
    /// New scene from a named preset; unknown names fall back to Classic
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64, preset: &str) -> Scene {
        let preset = Preset::from_name(preset).unwrap_or_else(|| {
            log::warn!("Unknown preset {:?}, using Classic", preset);
            Preset::Classic
        });
        log::info!("Scene created with preset {}", preset.as_str());
        Scene {
            session: Session::new(preset.config(), Settings::default(), seed as u64),
        }
    }

    /// New scene from JSON tuning and presentation overrides
    pub fn with_config(seed: f64, config_json: &str, settings_json: &str) -> Result<Scene, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(|e| js_error("Invalid config", e))?;
        let settings =
            Settings::from_json(settings_json).map_err(|e| js_error("Invalid settings", e))?;
        Ok(Scene {
            session: Session::new(config, settings, seed as u64),
        })
    }

    pub fn set_settings(&mut self, settings_json: &str) -> Result<(), JsValue> {
        let settings =
            Settings::from_json(settings_json).map_err(|e| js_error("Invalid settings", e))?;
        self.session.set_settings(settings);
        Ok(())
    }

    /// Advance by `dt_ms` milliseconds; returns the cues as a JSON array
    pub fn frame(&mut self, dt_ms: f64, pointer_down: bool) -> String {
        let cues = self.session.advance((dt_ms / 1000.0) as f32, pointer_down);
        serde_json::to_string(&cues).unwrap_or_else(|e| {
            log::error!("Failed to encode cues: {}", e);
            "[]".to_string()
        })
    }

    /// Start a new run right away; returns the cues as a JSON array
    pub fn restart(&mut self) -> String {
        let cues = self.session.restart();
        serde_json::to_string(&cues).unwrap_or_else(|_| "[]".to_string())
    }

    /// Flat sprite buffer: `[kind, x, y, width, height]` per sprite,
    /// `sprite_stride()` floats each
    pub fn sprites(&self) -> js_sys::Float32Array {
        let instances = self.session.state().sprite_instances();
        js_sys::Float32Array::from(as_floats(&instances))
    }

    /// Floats per sprite record in [`Scene::sprites`]
    pub fn sprite_stride() -> usize {
        SpriteInstance::STRIDE
    }

    pub fn run_state(&self) -> String {
        self.session.state().run_state.as_str().to_string()
    }

    pub fn wins(&self) -> u32 {
        self.session.stats().wins
    }

    pub fn losses(&self) -> u32 {
        self.session.stats().losses
    }
}
