//! First-person locomotion and obstacle collision
//!
//! Per frame: damp horizontal drift, apply gravity, add thrust from the
//! held keys, move relative to the view yaw, clamp to the floor, then test
//! the player box against every obstacle. A colliding move is discarded
//! entirely and the last good position restored.
//!
//! The collision test runs on the final position only (no sweep), so a move
//! longer than an obstacle's thickness plus the box width passes through it.
//! There is also no top-face collision: the table only blocks horizontally.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::commands::CommandState;
use super::room::{ObstacleKind, Room};
use crate::tuning::LocomotionConfig;
use crate::{forward_from_yaw, look_direction, right_from_yaw};

/// What happened to the player this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Position committed
    Moved,
    /// Position committed and the floor clamp caught a fall
    Landed,
    /// Overlapped an obstacle; position rolled back
    Blocked(ObstacleKind),
}

/// Player state: eye position, velocity and view orientation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Eye position (world units)
    pub position: Vec3,
    /// Velocity in view-relative terms: x = strafe, z = longitudinal
    /// (negative z moves forward), y = world vertical
    pub velocity: Vec3,
    /// Heading around +y (radians, 0 = facing -z)
    pub yaw: f32,
    /// Elevation (radians, clamped to ±π/2)
    pub pitch: f32,
    /// Set by the floor clamp, cleared by a jump
    pub can_jump: bool,
    /// Box derived from `position`, always current
    bounds: Aabb,
    /// Last position that did not overlap an obstacle
    last_good: Vec3,
}

impl Player {
    pub fn new(position: Vec3, config: &LocomotionConfig) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            can_jump: false,
            bounds: Self::bounds_at(position, config),
            last_good: position,
        }
    }

    /// Player box for an eye position
    pub fn bounds_at(position: Vec3, config: &LocomotionConfig) -> Aabb {
        let center = position - Vec3::Y * config.box_offset;
        Aabb::from_center_half_extents(center, config.box_half_extents)
    }

    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    #[inline]
    pub fn last_good_position(&self) -> Vec3 {
        self.last_good
    }

    /// Full view direction
    pub fn look_direction(&self) -> Vec3 {
        look_direction(self.yaw, self.pitch)
    }

    /// Apply relative mouse movement (pixels)
    pub fn look(&mut self, delta: Vec2, sensitivity: f32) {
        use std::f32::consts::FRAC_PI_2;

        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Jump if standing on the floor
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.can_jump {
            self.velocity.y += impulse;
            self.can_jump = false;
            true
        } else {
            false
        }
    }

    /// Move along the horizontal right vector of the current yaw
    pub fn move_right(&mut self, distance: f32) {
        self.position += right_from_yaw(self.yaw) * distance;
    }

    /// Move along the horizontal forward vector of the current yaw
    pub fn move_forward(&mut self, distance: f32) {
        self.position += forward_from_yaw(self.yaw) * distance;
    }

    /// Advance one frame
    pub fn step(
        &mut self,
        commands: &CommandState,
        room: &Room,
        config: &LocomotionConfig,
        dt: f32,
    ) -> MoveOutcome {
        let velocity = &mut self.velocity;
        velocity.x -= velocity.x * config.damping * dt;
        velocity.z -= velocity.z * config.damping * dt;
        velocity.y -= config.fall_acceleration() * dt;

        let direction = commands.move_direction();
        if commands.moving_longitudinal() {
            velocity.z -= direction.y * config.thrust * dt;
        }
        if commands.moving_lateral() {
            velocity.x -= direction.x * config.thrust * dt;
        }

        let (strafe, longitudinal, rise) = (velocity.x, velocity.z, velocity.y);
        self.move_right(-strafe * dt);
        self.move_forward(-longitudinal * dt);
        self.position.y += rise * dt;

        let mut landed = false;
        if self.position.y < config.floor_height {
            if self.velocity.y < 0.0 && !self.can_jump {
                landed = true;
            }
            self.velocity.y = 0.0;
            self.position.y = config.floor_height;
            self.can_jump = true;
        }

        self.bounds = Self::bounds_at(self.position, config);

        if let Some(obstacle) = room.first_hit(&self.bounds) {
            log::trace!(
                "Player blocked by {:?} at {}, rolling back to {}",
                obstacle.kind,
                self.position,
                self.last_good
            );
            let kind = obstacle.kind;
            self.position = self.last_good;
            self.bounds = Self::bounds_at(self.position, config);
            return MoveOutcome::Blocked(kind);
        }

        self.last_good = self.position;
        if landed {
            MoveOutcome::Landed
        } else {
            MoveOutcome::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::room::Obstacle;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn standing(position: Vec3) -> Player {
        let config = LocomotionConfig::default();
        let mut player = Player::new(position, &config);
        player.can_jump = true;
        player
    }

    #[test]
    fn test_bounds_initialized_on_creation() {
        let config = LocomotionConfig::default();
        let player = Player::new(PLAYER_START, &config);
        assert!(player.bounds().center().abs_diff_eq(PLAYER_START - Vec3::Y * 10.0, 1e-5));
        assert_eq!(player.last_good_position(), PLAYER_START);
    }

    #[test]
    fn test_forward_moves_toward_negative_z() {
        let config = LocomotionConfig::default();
        let mut player = standing(PLAYER_START);
        let commands = CommandState {
            forward: true,
            ..Default::default()
        };
        for _ in 0..10 {
            player.step(&commands, &Room::empty(), &config, DT);
        }
        assert!(player.position.z < PLAYER_START.z);
        assert!((player.position.x - PLAYER_START.x).abs() < 1e-4);
    }

    #[test]
    fn test_strafe_right_follows_yaw() {
        let config = LocomotionConfig::default();
        let mut player = standing(Vec3::new(0.0, FLOOR_HEIGHT, 0.0));
        // Facing -x, right points to -z
        player.yaw = std::f32::consts::FRAC_PI_2;
        let commands = CommandState {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            player.step(&commands, &Room::empty(), &config, DT);
        }
        assert!(player.position.z < -0.1);
        assert!(player.position.x.abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_not_faster_than_axial() {
        let config = LocomotionConfig::default();
        let mut axial = standing(Vec3::new(0.0, FLOOR_HEIGHT, 0.0));
        let mut diagonal = standing(Vec3::new(0.0, FLOOR_HEIGHT, 0.0));
        let forward = CommandState {
            forward: true,
            ..Default::default()
        };
        let forward_right = CommandState {
            forward: true,
            right: true,
            ..Default::default()
        };
        for _ in 0..30 {
            axial.step(&forward, &Room::empty(), &config, DT);
            diagonal.step(&forward_right, &Room::empty(), &config, DT);
        }
        let axial_dist = axial.position.with_y(0.0).length();
        let diagonal_dist = diagonal.position.with_y(0.0).length();
        assert!((axial_dist - diagonal_dist).abs() < 1e-3);
    }

    #[test]
    fn test_damping_stops_drift() {
        let config = LocomotionConfig::default();
        let mut player = standing(Vec3::new(0.0, FLOOR_HEIGHT, 0.0));
        player.velocity = Vec3::new(30.0, 0.0, -30.0);
        for _ in 0..120 {
            player.step(&CommandState::default(), &Room::empty(), &config, DT);
        }
        assert!(player.velocity.x.abs() < 0.01);
        assert!(player.velocity.z.abs() < 0.01);
    }

    #[test]
    fn test_floor_clamp() {
        let config = LocomotionConfig::default();
        let mut player = Player::new(Vec3::new(0.0, 12.0, 0.0), &config);
        let room = Room::empty();

        let mut previous_vy = player.velocity.y;
        let mut clamped_frame = None;
        for frame in 0..120 {
            let outcome = player.step(&CommandState::default(), &room, &config, DT);
            if player.position.y == config.floor_height && player.velocity.y == 0.0 {
                assert_eq!(outcome, MoveOutcome::Landed);
                clamped_frame = Some(frame);
                break;
            }
            // Still falling: velocity keeps decreasing
            assert!(player.velocity.y < previous_vy);
            assert!(player.position.y > config.floor_height);
            previous_vy = player.velocity.y;
        }
        assert!(clamped_frame.is_some());
        assert!(player.can_jump);
    }

    #[test]
    fn test_collision_rolls_back_position() {
        let config = LocomotionConfig::default();
        let start = Vec3::new(0.0, FLOOR_HEIGHT, 0.0);
        let mut player = standing(start);
        // Negative longitudinal velocity carries the player forward (-z)
        player.velocity = Vec3::new(0.0, 0.0, -60.0);

        // Wall just ahead (-z): box edge at -1.0, wall at -1.2
        let wall = Obstacle::new(
            ObstacleKind::Wall,
            Vec3::new(0.0, 0.0, -1.2),
            Vec3::new(10.0, 30.0, 0.01),
        );
        let room = Room::with_obstacles(vec![wall]);

        let outcome = player.step(&CommandState::default(), &room, &config, DT);
        assert_eq!(outcome, MoveOutcome::Blocked(ObstacleKind::Wall));
        assert_eq!(player.position, start);
        assert!(player.bounds().center().abs_diff_eq(start - Vec3::Y * 10.0, 1e-5));
        // Floor clamp still applied to velocity
        assert_eq!(player.velocity.y, 0.0);
        // Velocity itself is not reset by the rollback
        assert!(player.velocity.z < 0.0);
    }

    #[test]
    fn test_collision_does_not_slide() {
        let config = LocomotionConfig::default();
        let start = Vec3::new(0.0, FLOOR_HEIGHT, 0.0);
        let mut player = standing(start);
        // Diagonal velocity: only z would collide, but the whole move is dropped
        player.velocity = Vec3::new(-60.0, 0.0, -60.0);
        let wall = Obstacle::new(
            ObstacleKind::Wall,
            Vec3::new(0.0, 0.0, -1.2),
            Vec3::new(100.0, 30.0, 0.01),
        );
        let room = Room::with_obstacles(vec![wall]);
        player.step(&CommandState::default(), &room, &config, DT);
        assert_eq!(player.position, start);
    }

    #[test]
    fn test_walk_into_table_is_blocked() {
        let config = LocomotionConfig::default();
        let room = Room::standard();
        let mut player = standing(PLAYER_START);
        let commands = CommandState {
            forward: true,
            ..Default::default()
        };
        let mut blocked = false;
        for _ in 0..600 {
            if let MoveOutcome::Blocked(kind) = player.step(&commands, &room, &config, DT) {
                assert_eq!(kind, ObstacleKind::Table);
                blocked = true;
            }
        }
        assert!(blocked);
        // Box never overlaps the table front (z = 16) once committed
        assert!(player.position.z - 1.0 > 16.0);
    }

    #[test]
    fn test_jump_requires_floor() {
        let config = LocomotionConfig::default();
        let mut player = standing(Vec3::new(0.0, FLOOR_HEIGHT, 0.0));
        assert!(player.jump(config.jump_impulse));
        assert!(!player.jump(config.jump_impulse));

        player.step(&CommandState::default(), &Room::empty(), &config, DT);
        assert!(player.position.y > FLOOR_HEIGHT);
        assert!(!player.can_jump);
    }

    #[test]
    fn test_look_clamps_pitch() {
        let mut player = standing(Vec3::ZERO);
        player.look(Vec2::new(100.0, -10_000.0), LOOK_SENSITIVITY);
        assert!((player.yaw + 0.2).abs() < 1e-6);
        assert_eq!(player.pitch, std::f32::consts::FRAC_PI_2);
        player.look(Vec2::new(0.0, 10_000.0), LOOK_SENSITIVITY);
        assert_eq!(player.pitch, -std::f32::consts::FRAC_PI_2);
    }

    proptest! {
        #[test]
        fn prop_never_below_floor(
            start_y in 10.0f32..40.0,
            vy in -500.0f32..500.0,
            frames in 1usize..200,
            dt in 0.001f32..0.1,
        ) {
            let config = LocomotionConfig::default();
            let mut player = Player::new(Vec3::new(0.0, start_y, 0.0), &config);
            player.velocity.y = vy;
            for _ in 0..frames {
                player.step(&CommandState::default(), &Room::empty(), &config, dt);
                prop_assert!(player.position.y >= config.floor_height);
            }
        }

        #[test]
        fn prop_committed_box_is_clear(
            keys in proptest::collection::vec(0u8..16, 1..120),
            yaw in -3.0f32..3.0,
        ) {
            let config = LocomotionConfig::default();
            let room = Room::standard();
            let mut player = standing(PLAYER_START);
            player.yaw = yaw;
            for bits in keys {
                let commands = CommandState {
                    forward: bits & 1 != 0,
                    backward: bits & 2 != 0,
                    left: bits & 4 != 0,
                    right: bits & 8 != 0,
                    ..Default::default()
                };
                player.step(&commands, &room, &config, DT);
                prop_assert!(room.first_hit(player.bounds()).is_none());
            }
        }
    }
}
