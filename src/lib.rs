//! Pong Room - a walkable first-person room with a self-playing Pong table
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (locomotion, collision, pong)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Frame clock and keyboard mapping
//! - `settings`: Live-tunable parameters, persisted in LocalStorage
//! - `tuning`: Named simulation constants grouped for the step function

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::SimConfig;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Nominal frame time used when no previous frame exists (60 Hz)
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    // === Locomotion ===
    /// Horizontal velocity decay rate (1/s)
    pub const DAMPING: f32 = 10.0;
    /// Gravity per unit of mass (units/s²)
    pub const GRAVITY: f32 = 9.8;
    /// Player mass; GRAVITY * PLAYER_MASS = 980 units/s² downward
    pub const PLAYER_MASS: f32 = 100.0;
    /// Directional thrust (units/s²)
    pub const THRUST: f32 = 400.0;
    /// Upward velocity added by a jump (units/s)
    pub const JUMP_IMPULSE: f32 = 200.0;
    /// Minimum eye height above the room origin (units)
    pub const FLOOR_HEIGHT: f32 = 10.0;
    /// Distance from the eye down to the player box center (units)
    pub const PLAYER_BOX_OFFSET: f32 = 10.0;
    /// Half extents of the player box (units)
    pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 10.0, 1.0);
    /// Spawn point: standing behind the player's end of the table
    pub const PLAYER_START: Vec3 = Vec3::new(0.0, FLOOR_HEIGHT, 25.0);
    /// Mouse look sensitivity (radians per pixel)
    pub const LOOK_SENSITIVITY: f32 = 0.002;

    // === Pong (distances in table units, speeds in units per frame) ===
    /// Default ball speed
    pub const BALL_SPEED: f32 = 0.1;
    /// Ball center height above the playfield
    pub const BALL_HEIGHT: f32 = 0.5;
    pub const BALL_RADIUS: f32 = 0.5;
    /// Goal lines sit at ±GOAL_Z
    pub const GOAL_Z: f32 = 15.0;
    /// Side walls sit at ±SIDE_X
    pub const SIDE_X: f32 = 10.0;
    /// Maximum paddle travel per frame
    pub const PADDLE_SPEED: f32 = 0.2;
    /// Player paddle moves at this fraction of PADDLE_SPEED
    pub const PLAYER_PADDLE_FACTOR: f32 = 0.5;
    /// CPU proportional gain on the ball/paddle x distance
    pub const CPU_GAIN: f32 = 0.2;
    /// Player paddle at +PADDLE_Z, CPU paddle at -PADDLE_Z
    pub const PADDLE_Z: f32 = 15.0;
    /// How far before its line a paddle starts catching the ball
    pub const PADDLE_HIT_MARGIN: f32 = 0.9;
    /// Catch half-width around a paddle's x position
    pub const PADDLE_HALF_WIDTH: f32 = 1.1;
    /// Paddles travel within ±PADDLE_TRAVEL
    pub const PADDLE_TRAVEL: f32 = 15.0;
    /// Paddle mesh size (x, y, z)
    pub const PADDLE_SIZE: Vec3 = Vec3::new(3.0, 1.0, 1.0);

    // === Room layout ===
    pub const ROOM_HALF_SIZE: f32 = 50.0;
    pub const FLOOR_Y: f32 = -10.0;
    pub const CEILING_Y: f32 = 40.0;
    pub const WALL_HEIGHT: f32 = 50.0;
    pub const WALL_THICKNESS: f32 = 0.001;
    /// Playfield (the green surface the ball runs on)
    pub const PLAYFIELD_SIZE: (f32, f32) = (20.0, 30.0);
    pub const TABLE_SIZE: Vec3 = Vec3::new(22.0, 10.0, 32.0);
    pub const TABLE_CENTER: Vec3 = Vec3::new(0.0, -5.1, 0.0);
    pub const PILLAR_SIZE: Vec3 = Vec3::new(2.0, 20.0, 2.0);
    pub const PILLAR_CENTER: Vec3 = Vec3::new(20.0, 0.0, 5.0);

    // === Lights ===
    pub const SPOT_LIGHT_POS: Vec3 = Vec3::new(0.0, 10.0, 0.0);
    pub const DIRECTIONAL_LIGHT_POS: Vec3 = Vec3::new(0.0, 15.0, 0.0);
}

/// Horizontal look direction for a yaw angle (radians, 0 = facing -z)
#[inline]
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    let (sin, cos) = yaw.sin_cos();
    Vec3::new(-sin, 0.0, -cos)
}

/// Horizontal right vector for a yaw angle
#[inline]
pub fn right_from_yaw(yaw: f32) -> Vec3 {
    let (sin, cos) = yaw.sin_cos();
    Vec3::new(cos, 0.0, -sin)
}

/// Full view direction including pitch (radians, positive looks up)
#[inline]
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}
