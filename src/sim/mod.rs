//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per display frame, with the frame delta passed in
//! - Input arrives only through the `InputQueue`, drained at frame start
//! - Fixed obstacle order for collision queries
//! - No rendering or platform dependencies

pub mod aabb;
pub mod commands;
pub mod player;
pub mod pong;
pub mod room;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use commands::{Command, CommandState, FrameInput, InputEvent, InputQueue};
pub use player::{MoveOutcome, Player};
pub use pong::{Ball, Paddle, Pong, PongEvent, Side, Sign};
pub use room::{Obstacle, ObstacleKind, Room};
pub use state::{FrameSnapshot, SimEvent, SimState};
pub use tick::tick;
