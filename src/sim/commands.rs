//! Command flags and the input event queue
//!
//! Input callbacks never touch the simulation directly. They push
//! `InputEvent`s into an `InputQueue`, and the step drains the queue once
//! at the start of each frame, so no flag changes mid-step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A discrete control the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
    PaddleLeft,
    PaddleRight,
    /// One-shot: only the press matters
    Jump,
}

/// A single event from the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Command),
    Released(Command),
    /// Relative mouse movement in pixels
    Look { dx: f32, dy: f32 },
    /// Pointer capture gained (true) or lost (false)
    Capture(bool),
}

/// Pending events, filled by the input boundary between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Take every pending event, in arrival order
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }
}

/// Held-key state, read-only to the step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub paddle_left: bool,
    pub paddle_right: bool,
    /// Pointer captured; locomotion only runs while this is set
    pub captured: bool,
}

/// Per-frame one-shot input gathered while draining the queue
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Total mouse movement this frame (pixels)
    pub look: Vec2,
    pub jump: bool,
}

impl CommandState {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, command: Command, held: bool) {
        match command {
            Command::Forward => self.forward = held,
            Command::Backward => self.backward = held,
            Command::Left => self.left = held,
            Command::Right => self.right = held,
            Command::PaddleLeft => self.paddle_left = held,
            Command::PaddleRight => self.paddle_right = held,
            Command::Jump => {}
        }
    }

    /// Fold a batch of events into the flags, returning this frame's one-shots
    pub fn apply<I>(&mut self, events: I) -> FrameInput
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut frame = FrameInput::default();
        for event in events {
            match event {
                InputEvent::Pressed(Command::Jump) => frame.jump = true,
                InputEvent::Pressed(command) => self.set(command, true),
                InputEvent::Released(command) => self.set(command, false),
                InputEvent::Look { dx, dy } => frame.look += Vec2::new(dx, dy),
                InputEvent::Capture(captured) => {
                    self.captured = captured;
                    if !captured {
                        // Keys released while the pointer is free never reach us
                        self.release_movement();
                    }
                }
            }
        }
        frame
    }

    fn release_movement(&mut self) {
        self.forward = false;
        self.backward = false;
        self.left = false;
        self.right = false;
    }

    /// Any forward/backward key held
    #[inline]
    pub fn moving_longitudinal(&self) -> bool {
        self.forward || self.backward
    }

    /// Any strafe key held
    #[inline]
    pub fn moving_lateral(&self) -> bool {
        self.left || self.right
    }

    /// Unit movement direction in (strafe, forward) space, or zero.
    /// x = right - left, y = forward - backward.
    pub fn move_direction(&self) -> Vec2 {
        let x = self.right as i32 - self.left as i32;
        let z = self.forward as i32 - self.backward as i32;
        Vec2::new(x as f32, z as f32).normalize_or_zero()
    }
}
