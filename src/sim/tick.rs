//! Per-frame simulation step
//!
//! Runs once per display frame, in a fixed order:
//! input → locomotion & collision → ball → paddle bounces → CPU paddle →
//! player paddle.

use super::commands::InputQueue;
use super::state::{SimEvent, SimState};

/// Advance the simulation by one frame of `dt` seconds.
///
/// Pending input is drained first so flags stay fixed for the whole step.
/// Locomotion only runs while the pointer is captured; the pong game always
/// runs. Ball and paddle speeds are per frame and ignore `dt`.
pub fn tick(state: &mut SimState, input: &mut InputQueue, dt: f32) {
    state.events.clear();
    let frame_input = state.commands.apply(input.drain());

    if state.commands.captured {
        let locomotion = &state.config.locomotion;
        state.player.look(frame_input.look, locomotion.look_sensitivity);
        if frame_input.jump && state.player.jump(locomotion.jump_impulse) {
            state.events.push(SimEvent::PlayerJumped);
        }
        let outcome = state
            .player
            .step(&state.commands, &state.room, &state.config.locomotion, dt);
        state.record_move(outcome);
    }

    let mut pong_events = Vec::new();
    state
        .pong
        .step(&state.commands, &state.config.pong, &mut pong_events);
    state
        .events
        .extend(pong_events.into_iter().map(SimEvent::Pong));

    state.frame += 1;
}
