//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (animation-frame timestamps to clamped deltas)
//! - Input events (DOM key codes to simulation commands)
//!
//! Settings storage lives in `crate::settings`.

pub mod input;
pub mod time;

pub use input::{command_for_code, key_down, key_up};
pub use time::FrameClock;
