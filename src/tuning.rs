//! Data-driven simulation tuning
//!
//! Every constant the per-frame step reads, grouped so tests and demos can
//! build an exact configuration instead of touching globals.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Player movement and collision parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Horizontal velocity decay rate (1/s)
    pub damping: f32,
    /// Gravity per unit of mass (units/s²)
    pub gravity: f32,
    pub mass: f32,
    /// Directional thrust (units/s²)
    pub thrust: f32,
    /// Upward velocity added by a jump (units/s)
    pub jump_impulse: f32,
    /// Minimum eye height (units)
    pub floor_height: f32,
    /// Eye to box-center distance (units)
    pub box_offset: f32,
    pub box_half_extents: Vec3,
    /// Radians per pixel of mouse movement
    pub look_sensitivity: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            gravity: GRAVITY,
            mass: PLAYER_MASS,
            thrust: THRUST,
            jump_impulse: JUMP_IMPULSE,
            floor_height: FLOOR_HEIGHT,
            box_offset: PLAYER_BOX_OFFSET,
            box_half_extents: PLAYER_HALF_EXTENTS,
            look_sensitivity: LOOK_SENSITIVITY,
        }
    }
}

impl LocomotionConfig {
    /// Downward acceleration applied every frame (units/s²)
    #[inline]
    pub fn fall_acceleration(&self) -> f32 {
        self.gravity * self.mass
    }
}

/// Ball and paddle parameters (distances in table units, speeds per frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    /// Initial ball speed
    pub ball_speed: f32,
    /// Goal lines at ±goal_z
    pub goal_z: f32,
    /// Side walls at ±side_x
    pub side_x: f32,
    pub paddle_speed: f32,
    /// Player paddle step as a fraction of paddle_speed
    pub player_paddle_factor: f32,
    pub cpu_gain: f32,
    /// Player paddle at +paddle_z, CPU paddle at -paddle_z
    pub paddle_z: f32,
    pub hit_margin: f32,
    pub paddle_half_width: f32,
    /// Paddles stay within ±paddle_travel
    pub paddle_travel: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            goal_z: GOAL_Z,
            side_x: SIDE_X,
            paddle_speed: PADDLE_SPEED,
            player_paddle_factor: PLAYER_PADDLE_FACTOR,
            cpu_gain: CPU_GAIN,
            paddle_z: PADDLE_Z,
            hit_margin: PADDLE_HIT_MARGIN,
            paddle_half_width: PADDLE_HALF_WIDTH,
            paddle_travel: PADDLE_TRAVEL,
        }
    }
}

impl PongConfig {
    /// Per-frame step of the keyboard-driven paddle
    #[inline]
    pub fn player_paddle_step(&self) -> f32 {
        self.paddle_speed * self.player_paddle_factor
    }

    #[inline]
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(-self.paddle_travel, self.paddle_travel)
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub locomotion: LocomotionConfig,
    pub pong: PongConfig,
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration; missing fields fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
