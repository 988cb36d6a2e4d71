//! Live-tunable settings
//!
//! Exposed on the settings panel and persisted in LocalStorage. The
//! simulation only reads the ball speed; the rest drive the renderer.

use serde::{Deserialize, Serialize};

use crate::consts::BALL_SPEED;
use crate::sim::SimState;

/// Ball speed range (units per frame)
pub const BALL_SPEED_RANGE: (f32, f32) = (0.02, 0.5);
/// Spotlight cone angle range (radians)
pub const SPOT_ANGLE_RANGE: (f32, f32) = (0.0, 1.0);
/// Spotlight penumbra range (fraction of the cone)
pub const SPOT_PENUMBRA_RANGE: (f32, f32) = (0.0, 1.0);
/// Spotlight intensity range
pub const SPOT_INTENSITY_RANGE: (f32, f32) = (0.0, 200.0);

/// Settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Ball speed (units per frame along each axis)
    pub ball_speed: f32,

    // === Spotlight ===
    /// Cone half-angle (radians)
    pub spot_angle: f32,
    /// Soft edge, 0 = hard
    pub spot_penumbra: f32,
    pub spot_intensity: f32,

    // === Visual aids ===
    /// Draw markers at the light positions
    pub light_helpers: bool,
    /// Blob shadow under the ball
    pub shadows: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            spot_angle: 1.0,
            spot_penumbra: 0.0,
            spot_intensity: 100.0,
            light_helpers: true,
            shadows: true,
        }
    }
}

fn clamp_range(value: f32, (min, max): (f32, f32), fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

impl Settings {
    pub fn set_ball_speed(&mut self, speed: f32) {
        self.ball_speed = clamp_range(speed, BALL_SPEED_RANGE, BALL_SPEED);
    }

    pub fn set_spot_angle(&mut self, angle: f32) {
        self.spot_angle = clamp_range(angle, SPOT_ANGLE_RANGE, 1.0);
    }

    pub fn set_spot_penumbra(&mut self, penumbra: f32) {
        self.spot_penumbra = clamp_range(penumbra, SPOT_PENUMBRA_RANGE, 0.0);
    }

    pub fn set_spot_intensity(&mut self, intensity: f32) {
        self.spot_intensity = clamp_range(intensity, SPOT_INTENSITY_RANGE, 100.0);
    }

    /// Copy with every numeric field pulled into range.
    /// Stored JSON is user-editable, so loads go through this.
    pub fn sanitized(&self) -> Self {
        let mut settings = self.clone();
        settings.set_ball_speed(self.ball_speed);
        settings.set_spot_angle(self.spot_angle);
        settings.set_spot_penumbra(self.spot_penumbra);
        settings.set_spot_intensity(self.spot_intensity);
        settings
    }

    /// Push simulation-facing values into the state before a tick
    pub fn apply_to(&self, state: &mut SimState) {
        state.set_ball_speed(self.ball_speed);
    }

    /// Parse stored JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "pong_room_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(self) {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                        log::warn!("Could not write settings to LocalStorage");
                    } else {
                        log::debug!("Settings saved");
                    }
                }
                Err(e) => log::warn!("Could not serialize settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
        log::trace!("Settings not persisted on native ({})", Self::STORAGE_KEY);
    }
}
