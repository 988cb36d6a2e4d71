//! Keyboard mapping
//!
//! Uses `KeyboardEvent.code` (physical key) so WASD works on any layout.

use crate::sim::{Command, InputEvent};

/// Map a DOM key code to a command
pub fn command_for_code(code: &str) -> Option<Command> {
    match code {
        "KeyW" => Some(Command::Forward),
        "KeyS" => Some(Command::Backward),
        "KeyA" => Some(Command::Left),
        "KeyD" => Some(Command::Right),
        "ArrowLeft" => Some(Command::PaddleLeft),
        "ArrowRight" => Some(Command::PaddleRight),
        "Space" => Some(Command::Jump),
        _ => None,
    }
}

/// Event for a keydown; auto-repeat is dropped so a held Space jumps once
pub fn key_down(code: &str, repeat: bool) -> Option<InputEvent> {
    if repeat {
        return None;
    }
    command_for_code(code).map(InputEvent::Pressed)
}

pub fn key_up(code: &str) -> Option<InputEvent> {
    match command_for_code(code)? {
        Command::Jump => None,
        command => Some(InputEvent::Released(command)),
    }
}
