//! The walkable room: immutable obstacle boxes built once at startup

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// What an obstacle is (drives rendering color, not collision)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Wall,
    Table,
    Pillar,
}

/// A fixed box the player cannot enter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub bounds: Aabb,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, center: Vec3, size: Vec3) -> Self {
        Self {
            kind,
            bounds: Aabb::from_center_size(center, size),
        }
    }
}

/// The room's collision set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    obstacles: Vec<Obstacle>,
}

impl Room {
    /// Empty room (no obstacles at all)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard room: four walls, the pong table and a pillar
    pub fn standard() -> Self {
        let wall_y = FLOOR_Y + WALL_HEIGHT / 2.0;
        let span = ROOM_HALF_SIZE * 2.0;
        let along_x = Vec3::new(span, WALL_HEIGHT, WALL_THICKNESS);
        let along_z = Vec3::new(WALL_THICKNESS, WALL_HEIGHT, span);

        let obstacles = vec![
            Obstacle::new(ObstacleKind::Wall, Vec3::new(0.0, wall_y, -ROOM_HALF_SIZE), along_x),
            Obstacle::new(ObstacleKind::Wall, Vec3::new(0.0, wall_y, ROOM_HALF_SIZE), along_x),
            Obstacle::new(ObstacleKind::Wall, Vec3::new(-ROOM_HALF_SIZE, wall_y, 0.0), along_z),
            Obstacle::new(ObstacleKind::Wall, Vec3::new(ROOM_HALF_SIZE, wall_y, 0.0), along_z),
            Obstacle::new(ObstacleKind::Table, TABLE_CENTER, TABLE_SIZE),
            Obstacle::new(ObstacleKind::Pillar, PILLAR_CENTER, PILLAR_SIZE),
        ];

        log::debug!("Room built with {} obstacles", obstacles.len());
        Self { obstacles }
    }

    /// Build a room from an explicit obstacle list
    pub fn with_obstacles(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// First obstacle overlapping `bounds`, if any
    pub fn first_hit(&self, bounds: &Aabb) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.bounds.intersects(bounds))
    }
}
