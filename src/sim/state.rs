//! Simulation state and the snapshot handed to the renderer
//!
//! `SimState` owns everything the per-frame step mutates. The renderer
//! never sees it directly, only a `FrameSnapshot` copied out after the step.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::commands::CommandState;
use super::player::{MoveOutcome, Player};
use super::pong::{PongEvent, Pong, Side};
use super::room::{ObstacleKind, Room};
use crate::consts::PLAYER_START;
use crate::tuning::SimConfig;

/// Events recorded during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Player move discarded after overlapping an obstacle
    PlayerBlocked(ObstacleKind),
    /// Player fell onto the floor
    PlayerLanded,
    PlayerJumped,
    Pong(PongEvent),
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub config: SimConfig,
    pub room: Room,
    pub player: Player,
    pub pong: Pong,
    pub commands: CommandState,
    /// Frames stepped so far
    pub frame: u64,
    /// Events from the most recent tick
    pub events: Vec<SimEvent>,
}

impl SimState {
    /// Standard room, player at the spawn point
    pub fn new(config: SimConfig) -> Self {
        Self::with_room(config, Room::standard())
    }

    pub fn with_room(config: SimConfig, room: Room) -> Self {
        let player = Player::new(PLAYER_START, &config.locomotion);
        let pong = Pong::new(&config.pong);
        Self {
            config,
            room,
            player,
            pong,
            commands: CommandState::new(),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Live ball speed change; read by the next tick
    pub fn set_ball_speed(&mut self, speed: f32) {
        self.pong.ball.speed = speed;
    }

    pub(crate) fn record_move(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Moved => {}
            MoveOutcome::Landed => self.events.push(SimEvent::PlayerLanded),
            MoveOutcome::Blocked(kind) => self.events.push(SimEvent::PlayerBlocked(kind)),
        }
    }

    /// Goals scored this tick, by the scoring side
    pub fn goals(&self) -> impl Iterator<Item = Side> + '_ {
        self.events.iter().filter_map(|e| match e {
            SimEvent::Pong(PongEvent::Goal { conceded }) => Some(conceded.opponent()),
            _ => None,
        })
    }

    /// Copy out what the renderer needs
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            eye: self.player.position,
            yaw: self.player.yaw,
            pitch: self.player.pitch,
            ball: self.pong.ball.world_position(),
            player_paddle: self.pong.player.world_position(),
            cpu_paddle: self.pong.cpu.world_position(),
            player_paddle_active: self.pong.player.active,
            cpu_paddle_active: self.pong.cpu.active,
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

/// Read-only view of one frame for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub ball: Vec3,
    pub player_paddle: Vec3,
    pub cpu_paddle: Vec3,
    pub player_paddle_active: bool,
    pub cpu_paddle_active: bool,
}

impl FrameSnapshot {
    pub fn look_direction(&self) -> Vec3 {
        crate::look_direction(self.yaw, self.pitch)
    }
}
