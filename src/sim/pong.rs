//! Table pong: ball, player paddle and CPU paddle
//!
//! Coordinates are table-plane (x across, z along the table). The player
//! paddle guards +z, the CPU paddle guards -z. Speeds are per frame.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::commands::CommandState;
use crate::consts::BALL_HEIGHT;
use crate::tuning::PongConfig;

/// Sign of one ball direction component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Which end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Keyboard paddle at +z
    Player,
    /// Computer paddle at -z
    Cpu,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }
}

/// Something notable the pong step did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongEvent {
    /// Ball crossed `conceded`'s goal line and was reset
    Goal { conceded: Side },
    /// Ball bounced off a side boundary
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
}

/// The ball. Direction components are always exactly ±1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Table-plane position (x, z)
    pub pos: Vec2,
    pub dir_x: Sign,
    pub dir_z: Sign,
    /// Units per frame along each axis
    pub speed: f32,
}

impl Ball {
    pub fn new(speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            dir_x: Sign::Positive,
            dir_z: Sign::Positive,
            speed,
        }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.dir_x.as_f32(), self.dir_z.as_f32())
    }

    /// Displacement applied per frame
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.direction() * self.speed
    }

    /// Back to the center, serving in `dir_z`
    pub fn reset(&mut self, dir_z: Sign) {
        self.pos = Vec2::ZERO;
        self.dir_x = Sign::Positive;
        self.dir_z = dir_z;
    }

    /// World-space center
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.pos.x, BALL_HEIGHT, self.pos.y)
    }
}

/// A paddle sliding along x at a fixed z
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub z: f32,
    /// Latched when the ball bounces off this paddle
    pub active: bool,
}

impl Paddle {
    pub fn new(z: f32) -> Self {
        Self {
            x: 0.0,
            z,
            active: false,
        }
    }

    /// Ball x within this paddle's catch width
    #[inline]
    pub fn covers(&self, x: f32, half_width: f32) -> bool {
        x >= self.x - half_width && x <= self.x + half_width
    }

    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.x, BALL_HEIGHT, self.z)
    }
}

/// Ball plus both paddles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pong {
    pub ball: Ball,
    pub player: Paddle,
    pub cpu: Paddle,
}

impl Pong {
    pub fn new(config: &PongConfig) -> Self {
        Self {
            ball: Ball::new(config.ball_speed),
            player: Paddle::new(config.paddle_z),
            cpu: Paddle::new(-config.paddle_z),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }

    /// Advance one frame: ball, paddle bounces, CPU paddle, player paddle
    pub fn step(&mut self, commands: &CommandState, config: &PongConfig, events: &mut Vec<PongEvent>) {
        if let Some(event) = self.step_ball(config) {
            events.push(event);
        }
        if let Some(event) = self.resolve_paddle_hits(config) {
            events.push(event);
        }
        self.step_cpu_paddle(config);
        self.step_player_paddle(commands, config);
    }

    /// Goal lines first, then side boundaries, then move.
    /// A reset ball stays at the center for the frame it is served.
    pub fn step_ball(&mut self, config: &PongConfig) -> Option<PongEvent> {
        let ball = &mut self.ball;

        if ball.pos.y <= -config.goal_z {
            ball.reset(Sign::Positive);
            log::debug!("Goal against CPU, serving toward player");
            return Some(PongEvent::Goal {
                conceded: Side::Cpu,
            });
        }
        if ball.pos.y >= config.goal_z {
            ball.reset(Sign::Negative);
            log::debug!("Goal against player, serving toward CPU");
            return Some(PongEvent::Goal {
                conceded: Side::Player,
            });
        }

        let mut event = None;
        if ball.pos.x < -config.side_x || ball.pos.x > config.side_x {
            ball.dir_x = ball.dir_x.flipped();
            event = Some(PongEvent::WallBounce);
        }

        ball.pos += ball.velocity();
        event
    }

    /// Bounce the (already moved) ball off whichever paddle it reached.
    /// A ball past a paddle line but outside its width keeps going.
    pub fn resolve_paddle_hits(&mut self, config: &PongConfig) -> Option<PongEvent> {
        let ball = &mut self.ball;
        let half_width = config.paddle_half_width;

        if ball.pos.y >= self.player.z - config.hit_margin && self.player.covers(ball.pos.x, half_width) {
            self.player.active = true;
            ball.dir_z = ball.dir_z.flipped();
            log::debug!("Player paddle hit at x={:.2}", ball.pos.x);
            Some(PongEvent::PaddleHit(Side::Player))
        } else if ball.pos.y <= self.cpu.z + config.hit_margin && self.cpu.covers(ball.pos.x, half_width) {
            self.cpu.active = true;
            ball.dir_z = ball.dir_z.flipped();
            log::debug!("CPU paddle hit at x={:.2}", ball.pos.x);
            Some(PongEvent::PaddleHit(Side::Cpu))
        } else {
            None
        }
    }

    /// Proportional tracking of the ball, limited to `paddle_speed` per frame.
    /// Returns the applied delta.
    pub fn step_cpu_paddle(&mut self, config: &PongConfig) -> f32 {
        let desired = (self.ball.pos.x - self.cpu.x) * config.cpu_gain;
        let delta = desired.clamp(-config.paddle_speed, config.paddle_speed);
        let before = self.cpu.x;
        self.cpu.x = config.clamp_paddle_x(self.cpu.x + delta);
        self.cpu.x - before
    }

    /// Fixed-step keyboard movement; left wins when both keys are held.
    /// Returns the applied delta.
    pub fn step_player_paddle(&mut self, commands: &CommandState, config: &PongConfig) -> f32 {
        let step = config.player_paddle_step();
        let x = self.player.x;

        let delta = if commands.paddle_left {
            if x > -config.paddle_travel { -step } else { 0.0 }
        } else if commands.paddle_right {
            if x < config.paddle_travel { step } else { 0.0 }
        } else {
            0.0
        };

        self.player.x = config.clamp_paddle_x(x + delta);
        self.player.x - x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pong() -> (Pong, PongConfig) {
        let config = PongConfig::default();
        (Pong::new(&config), config)
    }

    #[test]
    fn test_initial_state() {
        let (pong, config) = pong();
        assert_eq!(pong.ball.pos, Vec2::ZERO);
        assert_eq!(pong.ball.direction(), Vec2::new(1.0, 1.0));
        assert_eq!(pong.player.z, config.paddle_z);
        assert_eq!(pong.cpu.z, -config.paddle_z);
        assert!(!pong.player.active && !pong.cpu.active);
    }

    #[test]
    fn test_back_goal_resets_toward_player() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(3.0, -15.05);
        pong.ball.dir_x = Sign::Negative;
        pong.ball.dir_z = Sign::Negative;

        let event = pong.step_ball(&config);
        assert_eq!(event, Some(PongEvent::Goal { conceded: Side::Cpu }));
        assert_eq!(pong.ball.pos, Vec2::ZERO);
        assert_eq!(pong.ball.dir_z, Sign::Positive);
        assert_eq!(pong.ball.dir_x, Sign::Positive);
    }

    #[test]
    fn test_front_goal_resets_toward_cpu() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(-2.0, 15.0);

        let event = pong.step_ball(&config);
        assert_eq!(event, Some(PongEvent::Goal { conceded: Side::Player }));
        assert_eq!(pong.ball.pos, Vec2::ZERO);
        assert_eq!(pong.ball.dir_z, Sign::Negative);
        assert_eq!(pong.ball.dir_x, Sign::Positive);
    }

    #[test]
    fn test_goal_beats_side_bounce() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(12.0, 16.0);
        let event = pong.step_ball(&config);
        assert!(matches!(event, Some(PongEvent::Goal { .. })));
        assert_eq!(pong.ball.dir_x, Sign::Positive);
    }

    #[test]
    fn test_side_bounce() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(10.05, 2.0);
        pong.ball.dir_x = Sign::Positive;

        let event = pong.step_ball(&config);
        assert_eq!(event, Some(PongEvent::WallBounce));
        assert_eq!(pong.ball.dir_x, Sign::Negative);
        assert!(pong.ball.pos.x < 10.05);
        assert!((pong.ball.pos.y - 2.1).abs() < 1e-5);
    }

    #[test]
    fn test_resting_on_side_boundary_does_not_bounce() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(10.0, 0.0);
        assert_eq!(pong.step_ball(&config), None);
        assert_eq!(pong.ball.dir_x, Sign::Positive);
    }

    #[test]
    fn test_paddle_hit_flips_z() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(0.5, 14.2);
        pong.ball.dir_z = Sign::Positive;

        let event = pong.resolve_paddle_hits(&config);
        assert_eq!(event, Some(PongEvent::PaddleHit(Side::Player)));
        assert_eq!(pong.ball.dir_z, Sign::Negative);
        assert!(pong.player.active);
        assert!(!pong.cpu.active);
    }

    #[test]
    fn test_cpu_paddle_hit() {
        let (mut pong, config) = pong();
        pong.cpu.x = -1.0;
        pong.ball.pos = Vec2::new(-2.0, -14.5);
        pong.ball.dir_z = Sign::Negative;

        let event = pong.resolve_paddle_hits(&config);
        assert_eq!(event, Some(PongEvent::PaddleHit(Side::Cpu)));
        assert_eq!(pong.ball.dir_z, Sign::Positive);
        assert!(pong.cpu.active);
    }

    #[test]
    fn test_paddle_miss_keeps_ball_moving() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(5.0, 14.5);

        assert_eq!(pong.resolve_paddle_hits(&config), None);
        assert_eq!(pong.ball.pos, Vec2::new(5.0, 14.5));
        assert_eq!(pong.ball.dir_z, Sign::Positive);
        assert!(!pong.player.active);
    }

    #[test]
    fn test_cpu_paddle_clamped_per_frame() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(9.0, 0.0);
        let delta = pong.step_cpu_paddle(&config);
        assert!((delta - config.paddle_speed).abs() < 1e-6);

        pong.ball.pos = Vec2::new(pong.cpu.x + 0.5, 0.0);
        let delta = pong.step_cpu_paddle(&config);
        assert!((delta - 0.5 * config.cpu_gain).abs() < 1e-6);
    }

    #[test]
    fn test_player_paddle_moves_and_stops_at_bounds() {
        let (mut pong, config) = pong();
        let left = CommandState {
            paddle_left: true,
            ..Default::default()
        };
        let delta = pong.step_player_paddle(&left, &config);
        assert!((delta + 0.1).abs() < 1e-6);

        for _ in 0..1000 {
            pong.step_player_paddle(&left, &config);
        }
        assert_eq!(pong.player.x, -config.paddle_travel);
        assert_eq!(pong.step_player_paddle(&left, &config), 0.0);
    }

    #[test]
    fn test_player_paddle_left_wins() {
        let (mut pong, config) = pong();
        let both = CommandState {
            paddle_left: true,
            paddle_right: true,
            ..Default::default()
        };
        assert!(pong.step_player_paddle(&both, &config) < 0.0);

        // Pinned left: holding both keys does not move it right
        pong.player.x = -config.paddle_travel;
        assert_eq!(pong.step_player_paddle(&both, &config), 0.0);
    }

    #[test]
    fn test_idle_player_paddle_stays() {
        let (mut pong, config) = pong();
        pong.player.x = 2.5;
        assert_eq!(pong.step_player_paddle(&CommandState::default(), &config), 0.0);
        assert_eq!(pong.player.x, 2.5);
    }

    #[test]
    fn test_end_to_end_single_paddle_bounce() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(-0.5, 13.5);
        let commands = CommandState::default();
        let mut events = Vec::new();

        let mut flips = 0;
        let mut flip_frame = None;
        let mut last_dir_z = pong.ball.dir_z;
        for frame in 0..40 {
            events.clear();
            pong.step(&commands, &config, &mut events);
            assert!(!events.iter().any(|e| matches!(e, PongEvent::Goal { .. })));
            if pong.ball.dir_z != last_dir_z {
                flips += 1;
                flip_frame = Some(frame);
                assert!(pong.ball.pos.y >= config.paddle_z - config.hit_margin);
                assert!(pong.player.covers(pong.ball.pos.x, config.paddle_half_width));
                assert_eq!(events, vec![PongEvent::PaddleHit(Side::Player)]);
            }
            last_dir_z = pong.ball.dir_z;
        }

        assert_eq!(flips, 1);
        assert!(flip_frame.is_some());
        assert_eq!(pong.ball.dir_z, Sign::Negative);
        // Heading back down the table, nowhere near a reset
        assert!(pong.ball.pos.y > 10.0 && pong.ball.pos.y < 14.1);
    }

    #[test]
    fn test_miss_then_goal() {
        let (mut pong, config) = pong();
        pong.ball.pos = Vec2::new(6.0, 13.0);
        let commands = CommandState::default();
        let mut events = Vec::new();
        let mut goal = None;
        for _ in 0..40 {
            events.clear();
            pong.step(&commands, &config, &mut events);
            if let Some(e) = events.iter().find(|e| matches!(e, PongEvent::Goal { .. })) {
                goal = Some(*e);
                break;
            }
        }
        assert_eq!(goal, Some(PongEvent::Goal { conceded: Side::Player }));
        assert_eq!(pong.ball.pos, Vec2::ZERO);
        assert_eq!(pong.ball.dir_z, Sign::Negative);
    }

    proptest! {
        #[test]
        fn prop_direction_components_stay_unit(
            x in -12.0f32..12.0,
            z in -16.0f32..16.0,
            speed in 0.02f32..0.5,
            frames in 1usize..2000,
        ) {
            let (mut pong, config) = pong();
            pong.ball.pos = Vec2::new(x, z);
            pong.ball.speed = speed;
            let mut events = Vec::new();
            for _ in 0..frames {
                pong.step(&CommandState::default(), &config, &mut events);
                let v = pong.ball.velocity();
                prop_assert!((v.x.abs() - speed).abs() < 1e-6);
                prop_assert!((v.y.abs() - speed).abs() < 1e-6);
            }
        }

        #[test]
        fn prop_cpu_delta_bounded(
            ball_x in -1000.0f32..1000.0,
            paddle_x in -15.0f32..15.0,
        ) {
            let (mut pong, config) = pong();
            pong.ball.pos.x = ball_x;
            pong.cpu.x = paddle_x;
            let delta = pong.step_cpu_paddle(&config);
            prop_assert!(delta.abs() <= config.paddle_speed + 1e-5);
            prop_assert!(pong.cpu.x.abs() <= config.paddle_travel);
        }

        #[test]
        fn prop_player_paddle_in_range(
            keys in proptest::collection::vec(0u8..4, 1..2000),
        ) {
            let (mut pong, config) = pong();
            for bits in keys {
                let commands = CommandState {
                    paddle_left: bits & 1 != 0,
                    paddle_right: bits & 2 != 0,
                    ..Default::default()
                };
                pong.step_player_paddle(&commands, &config);
                prop_assert!(pong.player.x >= -config.paddle_travel);
                prop_assert!(pong.player.x <= config.paddle_travel);
            }
        }
    }
}
